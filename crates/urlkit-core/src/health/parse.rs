//! Parse HTTP response header lines into a HeadResponse.

use super::HeadResponse;

/// Build a HeadResponse from the status code and collected header lines.
///
/// Only the last response block is considered, so interim `1xx` responses
/// do not leak their headers.
pub(crate) fn parse_head(status: u32, lines: &[String]) -> HeadResponse {
    let start = lines
        .iter()
        .rposition(|l| l.trim_start().starts_with("HTTP/"))
        .unwrap_or(0);

    let mut location = None;
    for line in &lines[start..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            if name.trim().eq_ignore_ascii_case("location") && !value.is_empty() {
                location = Some(value.to_string());
            }
        }
    }

    HeadResponse { status, location }
}
