//! `urlkit brands` / `urlkit brand-urls <brand>` – sitemap brand listing.

use anyhow::{Context, Result};
use urlkit_core::config::UrlkitConfig;
use urlkit_core::locale::GLOBAL_LIVE_TOKEN;
use urlkit_core::sitemap::{self, BrandIndex, SitemapScope};

/// Fetch the global or CN sitemap. A failed fetch is reported and yields an
/// empty index.
async fn load_index(cfg: &UrlkitConfig, cn: bool) -> Result<BrandIndex> {
    let (url, scope) = if cn {
        (cfg.cn_sitemap_url.clone(), SitemapScope::Bare)
    } else {
        (
            cfg.sitemap_url.clone(),
            SitemapScope::Locale(GLOBAL_LIVE_TOKEN.to_string()),
        )
    };
    let opts = cfg.http_options();
    let fetched = tokio::task::spawn_blocking({
        let url = url.clone();
        move || sitemap::fetch_sitemap(&url, &opts)
    })
    .await
    .context("sitemap fetch task join")?;

    let urls = match fetched {
        Ok(urls) => urls,
        Err(e) => {
            tracing::warn!("fetch sitemap {} failed: {:#}", url, e);
            eprintln!("warning: could not fetch sitemap {url}: {e:#}");
            Vec::new()
        }
    };
    let index = BrandIndex::new(scope, urls);
    tracing::debug!("sitemap {} lists {} URLs", url, index.urls().len());
    Ok(index)
}

pub async fn run_brands(cfg: &UrlkitConfig, cn: bool) -> Result<()> {
    let index = load_index(cfg, cn).await?;
    for name in index.brand_names() {
        println!("{name}");
    }
    Ok(())
}

pub async fn run_brand_urls(cfg: &UrlkitConfig, brand: &str, cn: bool) -> Result<()> {
    let index = load_index(cfg, cn).await?;
    let related = index.related_urls(brand);
    for url in &related {
        println!("{url}");
    }
    println!("Total Related URLs: {}", related.len());
    Ok(())
}
