//! Text, CSV and JSON renderings of batch results.

use std::io::{self, Write};

use serde::Serialize;

use crate::drivers::DriverSection;
use crate::health::{BatchReport, StatusGroups};
use crate::region::RegionBuckets;

/// Header row of the two-column status export.
pub const CSV_HEADER: [&str; 2] = ["Status Code", "URL"];

const RULE_WIDTH: usize = 50;

/// `Status <outcome>:` blocks with `- <url>` lines, blank line after each.
pub fn status_text(groups: &StatusGroups) -> String {
    let mut out = String::new();
    for group in groups.iter() {
        out.push_str(&format!("Status {}:\n", group.status));
        for url in &group.urls {
            out.push_str(&format!("- {url}\n"));
        }
        out.push('\n');
    }
    out
}

/// One-line timing summary for a batch.
pub fn elapsed_line(report: &BatchReport) -> String {
    format!(
        "Time taken to check {} URLs: {:.2} seconds",
        report.checked,
        report.elapsed.as_secs_f64()
    )
}

/// Two-column CSV, one row per URL, RFC 4180 quoting and CRLF line ends.
pub fn write_status_csv<W: Write>(groups: &StatusGroups, mut w: W) -> io::Result<()> {
    write_csv_row(&mut w, &CSV_HEADER)?;
    for (status, url) in groups.rows() {
        let status = status.to_string();
        write_csv_row(&mut w, &[status.as_str(), url])?;
    }
    w.flush()
}

fn write_csv_row<W: Write>(w: &mut W, fields: &[&str]) -> io::Result<()> {
    let line = fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",");
    write!(w, "{line}\r\n")
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    checked: usize,
    elapsed_secs: f64,
    groups: &'a StatusGroups,
}

/// Pretty JSON: `{checked, elapsed_secs, groups: [{status, urls}]}`.
pub fn status_json(report: &BatchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        checked: report.checked,
        elapsed_secs: report.elapsed.as_secs_f64(),
        groups: &report.groups,
    })
}

/// `<GROUP> URLs:` blocks for the non-empty regions, each preceded by a
/// blank line.
pub fn region_blocks(buckets: &RegionBuckets) -> String {
    let mut out = String::new();
    for (group, urls) in buckets.iter() {
        if urls.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{group} URLs:\n"));
        out.push_str(&urls.join("\n"));
        out.push('\n');
    }
    out
}

/// Alternate-link triage for one page, closed by a `=` rule.
pub fn regions_text(base_url: &str, buckets: &RegionBuckets) -> String {
    let mut out = format!("Base URL: {base_url}\n");
    out.push_str(&region_blocks(buckets));
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out
}

/// Driver page sections, each headed by its title inside a `=` rule.
pub fn drivers_text(sections: &[DriverSection]) -> String {
    let rule = "=".repeat(RULE_WIDTH / 2);
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("{rule}{}{rule}\n", section.title));
        for url in &section.urls {
            out.push_str(url);
            out.push('\n');
        }
    }
    out
}
