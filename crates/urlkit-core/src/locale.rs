//! Locale token codec.
//!
//! Live and Preview paths carry the locale as a single `lang-region` segment
//! (e.g. `de-de`). Author paths carry it as two segments, region first and an
//! uppercased region in the trailing component (e.g. `de/de_DE`).
//!
//! The worldwide default is special-cased on every environment: `en-us` on
//! Live, `en-zz` on Preview and `zz/en_ZZ` on Author.

use std::fmt;

/// Live token of the worldwide default locale.
pub const GLOBAL_LIVE_TOKEN: &str = "en-us";
/// Preview token of the worldwide default locale.
pub const GLOBAL_PREVIEW_TOKEN: &str = "en-zz";
/// Author region segment of the worldwide default locale.
pub const GLOBAL_AUTHOR_REGION: &str = "zz";
/// Author language segment of the worldwide default locale.
pub const GLOBAL_AUTHOR_LANGUAGE: &str = "en_ZZ";

/// A locale as encoded in a page path.
///
/// Codes are not validated against any table; any `xx-yy` shaped token is
/// carried through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocaleToken {
    /// Worldwide default (`en-us` on Live).
    Global,
    /// Concrete language + region pair, both lowercase as they appear on Live.
    Regional { language: String, region: String },
}

impl LocaleToken {
    /// Decode a Live path segment. Returns `None` when the segment is not
    /// shaped like `xx-yy` (two ASCII letters, hyphen, two ASCII letters).
    pub fn from_live(segment: &str) -> Option<Self> {
        if segment == GLOBAL_LIVE_TOKEN {
            return Some(LocaleToken::Global);
        }
        let (language, region) = segment.split_once('-')?;
        if !is_code(language) || !is_code(region) {
            return None;
        }
        Some(LocaleToken::Regional {
            language: language.to_string(),
            region: region.to_string(),
        })
    }

    /// Decode a Preview path segment. Only the default alias differs from Live.
    pub fn from_preview(segment: &str) -> Option<Self> {
        if segment == GLOBAL_PREVIEW_TOKEN {
            return Some(LocaleToken::Global);
        }
        Self::from_live(segment)
    }

    /// Decode the two Author segments (`de`, `de_DE`).
    ///
    /// Region is lowercased, language is lowercased and cut at the first `_`.
    pub fn from_author(region: &str, language: &str) -> Self {
        let region = region.to_ascii_lowercase();
        if region == GLOBAL_AUTHOR_REGION {
            return LocaleToken::Global;
        }
        let language = language.to_ascii_lowercase();
        let language = language.split('_').next().unwrap_or_default().to_string();
        LocaleToken::Regional { language, region }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, LocaleToken::Global)
    }

    /// Single path segment used on Live hosts.
    pub fn live_token(&self) -> String {
        match self {
            LocaleToken::Global => GLOBAL_LIVE_TOKEN.to_string(),
            LocaleToken::Regional { language, region } => format!("{language}-{region}"),
        }
    }

    /// Single path segment used on Preview hosts.
    pub fn preview_token(&self) -> String {
        if self.is_global() {
            GLOBAL_PREVIEW_TOKEN.to_string()
        } else {
            self.live_token()
        }
    }

    /// Two path segments used under the Author content root, joined by `/`.
    pub fn author_token(&self) -> String {
        match self {
            LocaleToken::Global => format!("{GLOBAL_AUTHOR_REGION}/{GLOBAL_AUTHOR_LANGUAGE}"),
            LocaleToken::Regional { language, region } => {
                format!("{region}/{language}_{}", region.to_ascii_uppercase())
            }
        }
    }
}

fn is_code(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic())
}

impl fmt::Display for LocaleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.live_token())
    }
}
