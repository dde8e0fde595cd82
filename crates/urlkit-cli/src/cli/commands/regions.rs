//! `urlkit regions <page>...` – fetch alternate-language links and group them.

use anyhow::{Context, Result};
use urlkit_core::config::UrlkitConfig;
use urlkit_core::{page, report};

pub async fn run_regions(cfg: &UrlkitConfig, pages: Vec<String>) -> Result<()> {
    let table = cfg.region_table();
    for base in pages {
        let links = tokio::task::spawn_blocking({
            let base = base.clone();
            let opts = cfg.http_options();
            move || page::fetch_alternate_links(&base, &opts)
        })
        .await
        .context("page fetch task join")?;

        let links = match links {
            Ok(links) => links,
            Err(e) => {
                tracing::warn!("fetch {} failed: {:#}", base, e);
                eprintln!("warning: could not fetch {base}: {e:#}");
                Vec::new()
            }
        };
        let buckets = table.partition(links);
        tracing::debug!("{}: {} alternate links", base, buckets.total());
        print!("{}", report::regions_text(&base, &buckets));
    }
    Ok(())
}
