//! Page collaborator: alternate-language links declared in a page head.

use std::collections::HashSet;
use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;

use crate::fetch::{fetch_text, HttpOptions};
use crate::sitemap::unescape_xml;

fn head_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?is)<head\b[^>]*>(.*?)</head\s*>").expect("head pattern is valid"))
}

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?is)<link\b([^>]*)>").expect("link pattern is valid"))
}

fn attr_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)(?:^|\s)(rel|href)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
            .expect("attribute pattern is valid")
    })
}

/// `href` of every `<link rel="alternate">` inside `<head>`, de-duplicated
/// in first-seen order. Empty when the document has no head.
pub fn extract_alternate_links(html: &str) -> Vec<String> {
    let Some(head) = head_pattern().captures(html) else {
        tracing::warn!("no <head> tag found in the document");
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for tag in link_pattern().captures_iter(&head[1]) {
        let mut is_alternate = false;
        let mut href = None;
        for attr in attr_pattern().captures_iter(&tag[1]) {
            let value = attr
                .get(2)
                .or_else(|| attr.get(3))
                .or_else(|| attr.get(4))
                .map_or("", |m| m.as_str());
            if attr[1].eq_ignore_ascii_case("rel") {
                is_alternate = value
                    .split_ascii_whitespace()
                    .any(|t| t.eq_ignore_ascii_case("alternate"));
            } else {
                href = Some(unescape_xml(value.trim()));
            }
        }
        if let Some(href) = href.filter(|h| is_alternate && !h.is_empty()) {
            if seen.insert(href.clone()) {
                links.push(href);
            }
        }
    }
    links
}

/// Fetch `url` and return its alternate-language links.
pub fn fetch_alternate_links(url: &str, opts: &HttpOptions) -> Result<Vec<String>> {
    let html = fetch_text(url, opts)?;
    let links = extract_alternate_links(&html);
    if links.is_empty() {
        tracing::warn!("no alternate links found on {}", url);
    }
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_alternate_links() {
        let html = r#"<!DOCTYPE html><html><head>
<meta charset="utf-8">
<link rel="canonical" href="https://www.nvidia.com/en-us/geforce/">
<link rel="alternate" hreflang="de-de" href="https://www.nvidia.com/de-de/geforce/">
<link href='https://www.nvidia.com/ja-jp/geforce/' rel='alternate' hreflang='ja-jp'/>
<LINK REL="Alternate" HREF="https://www.nvidia.cn/geforce/">
<link rel="alternate" hreflang="x-default" href="https://www.nvidia.com/de-de/geforce/">
</head><body><link rel="alternate" href="https://body.example/"></body></html>"#;
        assert_eq!(
            extract_alternate_links(html),
            [
                "https://www.nvidia.com/de-de/geforce/",
                "https://www.nvidia.com/ja-jp/geforce/",
                "https://www.nvidia.cn/geforce/",
            ]
        );
    }

    #[test]
    fn data_attributes_are_not_rel_or_href() {
        let html = r#"<html><head>
<link rel="stylesheet" href="/site.css" data-rel="alternate">
<link rel="alternate" href="https://www.nvidia.com/de-de/" data-href="https://www.nvidia.com/xx-xx/">
</head></html>"#;
        assert_eq!(extract_alternate_links(html), ["https://www.nvidia.com/de-de/"]);
    }

    #[test]
    fn rel_token_list() {
        let html = r#"<head><link rel="alternate stylesheet" href="/alt.css"></head>"#;
        assert_eq!(extract_alternate_links(html), ["/alt.css"]);
    }

    #[test]
    fn no_head_no_links() {
        assert!(extract_alternate_links("<html><body>hi</body></html>").is_empty());
        assert!(extract_alternate_links("<head></head>").is_empty());
    }

    #[test]
    fn href_entities_decoded() {
        let html = r#"<head><link rel="alternate" href="https://x/?a=1&amp;b=2"></head>"#;
        assert_eq!(extract_alternate_links(html), ["https://x/?a=1&b=2"]);
    }
}
