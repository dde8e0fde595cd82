//! URL environment transcoder.
//!
//! Pure conversions between the Live, Author and Preview representations of
//! a page. Every direction parses the input structurally through
//! [`SiteUrl`](crate::url_model::SiteUrl); nothing here performs I/O.

mod author;
mod preview;

use thiserror::Error;

use crate::url_model::{Environment, UrlModelError};

/// Content root under `/content/` on the Author host.
pub const DEFAULT_BRAND_ROOT: &str = "nvidiaGDC";
/// Suffix appended to every Author page path.
pub const AUTHOR_PAGE_SUFFIX: &str = ".html?wcmmode=disabled";
/// Page name Author uses for a section landing page.
pub const AUTHOR_HOME_PAGE: &str = "home";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscodeError {
    #[error(transparent)]
    Url(#[from] UrlModelError),
    #[error("expected a {expected} URL, got a {found} URL")]
    WrongEnvironment {
        expected: Environment,
        found: Environment,
    },
    #[error("no locale segment in {0}")]
    MissingLocale(String),
    #[error("no section after the locale in {0}")]
    MissingSection(String),
}

/// Which conversion to apply to a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LiveToAuthor,
    AuthorToLive,
    LiveToPreview,
    PreviewToLive,
}

/// Converts page URLs between environments.
#[derive(Debug, Clone)]
pub struct Transcoder {
    brand_root: String,
}

impl Default for Transcoder {
    fn default() -> Self {
        Self::new(DEFAULT_BRAND_ROOT)
    }
}

impl Transcoder {
    pub fn new(brand_root: impl Into<String>) -> Self {
        Self {
            brand_root: brand_root.into(),
        }
    }

    pub fn brand_root(&self) -> &str {
        &self.brand_root
    }

    /// Apply `direction` to one URL. `None` means the input did not convert;
    /// the reason is logged at debug level.
    pub fn convert(&self, direction: Direction, url: &str) -> Option<String> {
        let result = match direction {
            Direction::LiveToAuthor => self.to_author(url),
            Direction::AuthorToLive => return self.to_live(url),
            Direction::LiveToPreview => self.to_preview(url),
            Direction::PreviewToLive => self.preview_to_live(url),
        };
        match result {
            Ok(converted) => Some(converted),
            Err(e) => {
                tracing::debug!("cannot convert {url}: {e}");
                None
            }
        }
    }

    /// Convert every URL in order; one output slot per input.
    pub fn convert_batch<'a, I>(&self, direction: Direction, urls: I) -> Vec<Option<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        urls.into_iter().map(|u| self.convert(direction, u)).collect()
    }
}
