//! Structural URL model.
//!
//! Splits a page URL into scheme, host, path segments and query, and derives
//! environment, locale and root/deep classification from that structure.

mod environment;

pub use environment::{bare_domain, Environment};

use thiserror::Error;

use crate::locale::LocaleToken;
use crate::transcode::AUTHOR_HOME_PAGE;

/// First path segment of every Author page.
pub const AUTHOR_CONTENT_SEGMENT: &str = "content";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlModelError {
    #[error("not a URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("URL has no host: {0}")]
    MissingHost(String),
}

/// A page URL broken into the parts the transcoder works with.
///
/// Empty path segments (from trailing or doubled slashes) are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl {
    scheme: String,
    host: String,
    segments: Vec<String>,
    trailing_slash: bool,
    query: Option<String>,
}

impl SiteUrl {
    pub fn parse(raw: &str) -> Result<Self, UrlModelError> {
        let parsed = url::Url::parse(raw.trim())?;
        let host = match (parsed.host_str(), parsed.port()) {
            (Some(h), Some(p)) => format!("{h}:{p}"),
            (Some(h), None) => h.to_string(),
            (None, _) => return Err(UrlModelError::MissingHost(raw.to_string())),
        };
        let path = parsed.path();
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();
        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host,
            trailing_slash: path.ends_with('/') && !segments.is_empty(),
            segments,
            query: parsed.query().map(str::to_string),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Host without its environment label (`www.nvidia.com` -> `nvidia.com`).
    pub fn domain(&self) -> &str {
        bare_domain(&self.host)
    }

    pub fn environment(&self) -> Environment {
        Environment::from_host(&self.host)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Locale encoded in the path, decoded according to the environment.
    pub fn locale(&self) -> Option<LocaleToken> {
        match self.environment() {
            Environment::Live => LocaleToken::from_live(self.segments.first()?),
            Environment::Preview => LocaleToken::from_preview(self.segments.first()?),
            Environment::Author => {
                if self.segments.first()? != AUTHOR_CONTENT_SEGMENT {
                    return None;
                }
                let region = self.segments.get(2)?;
                let language = self.segments.get(3)?;
                Some(LocaleToken::from_author(region, language))
            }
        }
    }

    /// Number of leading segments that encode the locale (or content root
    /// plus locale on Author).
    fn locale_width(&self) -> usize {
        match self.environment() {
            Environment::Author => 4,
            Environment::Live | Environment::Preview => 1,
        }
    }

    /// Segments following the locale token. Empty when there is no locale.
    pub fn path_remainder(&self) -> &[String] {
        if self.locale().is_none() {
            return &[];
        }
        self.segments.get(self.locale_width()..).unwrap_or_default()
    }

    /// True for a section landing page: exactly one segment after the locale
    /// on Live and Preview, `<section>/home.html` on Author.
    pub fn is_root(&self) -> bool {
        let rest = self.path_remainder();
        match self.environment() {
            Environment::Author => match rest {
                [_, page] => page.split('.').next() == Some(AUTHOR_HOME_PAGE),
                _ => false,
            },
            Environment::Live | Environment::Preview => rest.len() == 1,
        }
    }

    /// Rebuild the URL on `host` with `segments`, keeping this URL's scheme,
    /// trailing slash and query.
    pub(crate) fn rebuild(&self, host: &str, segments: &[String]) -> String {
        let mut out = format!("{}://{}/{}", self.scheme, host, segments.join("/"));
        if self.trailing_slash && !segments.is_empty() {
            out.push('/');
        }
        if let Some(q) = &self.query {
            out.push('?');
            out.push_str(q);
        }
        out
    }
}
