//! Brand listing over sitemap URLs.
//!
//! A brand is the top-level section of the site. On localized sitemaps the
//! section follows the locale segment and brands are taken from section
//! landing pages only; on bare sitemaps (no locale segment) every URL's first
//! segment counts.

use std::collections::BTreeSet;

use crate::url_model::SiteUrl;

/// How sitemap paths are laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapScope {
    /// Paths start with this locale segment (e.g. `en-us`).
    Locale(String),
    /// Paths start directly with the brand.
    Bare,
}

/// Sitemap URLs indexed by brand.
#[derive(Debug, Clone)]
pub struct BrandIndex {
    scope: SitemapScope,
    urls: Vec<String>,
}

impl BrandIndex {
    pub fn new(scope: SitemapScope, urls: Vec<String>) -> Self {
        Self { scope, urls }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Path segments after the scope prefix, or `None` when the URL is out
    /// of scope.
    fn scoped_segments(&self, url: &str) -> Option<Vec<String>> {
        let site = SiteUrl::parse(url).ok()?;
        let segments = site.segments();
        match &self.scope {
            SitemapScope::Locale(locale) => {
                let (first, rest) = segments.split_first()?;
                (first == locale).then(|| rest.to_vec())
            }
            SitemapScope::Bare => Some(segments.to_vec()),
        }
    }

    /// Sorted, de-duplicated brand names.
    pub fn brand_names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for url in &self.urls {
            let Some(rest) = self.scoped_segments(url) else {
                continue;
            };
            let brand = match self.scope {
                SitemapScope::Locale(_) if rest.len() == 1 => rest.first(),
                SitemapScope::Locale(_) => None,
                SitemapScope::Bare => rest.first(),
            };
            if let Some(b) = brand {
                names.insert(b.clone());
            }
        }
        names.into_iter().collect()
    }

    /// URLs under `brand`, in sitemap order (the landing page included).
    pub fn related_urls(&self, brand: &str) -> Vec<String> {
        self.urls
            .iter()
            .filter(|url| {
                self.scoped_segments(url)
                    .is_some_and(|rest| rest.first().map(String::as_str) == Some(brand))
            })
            .cloned()
            .collect()
    }
}
