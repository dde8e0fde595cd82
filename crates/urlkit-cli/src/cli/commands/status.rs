//! `urlkit status` – HEAD-check a batch of URLs and group by outcome.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use urlkit_core::config::UrlkitConfig;
use urlkit_core::health::{CurlProbe, LinkHealthResolver};
use urlkit_core::report;

/// Where and how the grouped report is written.
#[derive(Debug, Clone, Default)]
pub struct StatusOutput {
    pub csv: Option<PathBuf>,
    pub json: bool,
}

pub async fn run_status(
    cfg: &UrlkitConfig,
    urls: Vec<String>,
    jobs: usize,
    output: &StatusOutput,
) -> Result<()> {
    let opts = cfg.http_options();
    let batch = tokio::task::spawn_blocking(move || {
        LinkHealthResolver::new(CurlProbe::new(opts))
            .with_jobs(jobs)
            .check_batch(&urls)
    })
    .await
    .context("status task join")?;

    if output.json {
        println!("{}", report::status_json(&batch).context("render JSON report")?);
    } else {
        println!("{}", report::elapsed_line(&batch));
        println!();
        print!("{}", report::status_text(&batch.groups));
    }

    if let Some(path) = &output.csv {
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        let mut w = BufWriter::new(file);
        report::write_status_csv(&batch.groups, &mut w)
            .and_then(|_| w.flush())
            .with_context(|| format!("write {}", path.display()))?;
        tracing::info!("wrote CSV report to {}", path.display());
        eprintln!("CSV written to {}", path.display());
    }
    Ok(())
}
