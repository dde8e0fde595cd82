//! Sitemap collaborator: fetch a sitemap and list its `<loc>` URLs.

mod brands;

pub use brands::{BrandIndex, SitemapScope};

use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;

use crate::fetch::{fetch_text, HttpOptions};

fn loc_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)<(?:[\w-]+:)?loc\b[^>]*>\s*(.*?)\s*</(?:[\w-]+:)?loc\s*>")
            .expect("loc pattern is valid")
    })
}

/// `<loc>` values of a sitemap (or sitemap index) document, in document order.
pub fn extract_locs(xml: &str) -> Vec<String> {
    loc_pattern()
        .captures_iter(xml)
        .map(|c| unescape_xml(strip_cdata(&c[1])))
        .filter(|u| !u.is_empty())
        .collect()
}

/// Download `url` and extract its `<loc>` entries.
pub fn fetch_sitemap(url: &str, opts: &HttpOptions) -> Result<Vec<String>> {
    let xml = fetch_text(url, opts)?;
    let urls = extract_locs(&xml);
    tracing::info!("sitemap {} lists {} URLs", url, urls.len());
    Ok(urls)
}

fn strip_cdata(s: &str) -> &str {
    s.strip_prefix("<![CDATA[")
        .and_then(|r| r.strip_suffix("]]>"))
        .unwrap_or(s)
        .trim()
}

/// Replace the five predefined XML entities.
pub(crate) fn unescape_xml(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
