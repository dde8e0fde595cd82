//! Live <-> Preview conversion.
//!
//! Only the host label and the default-locale alias differ between the two;
//! every other path segment is identical.

use super::{TranscodeError, Transcoder};
use crate::locale::LocaleToken;
use crate::url_model::{Environment, SiteUrl};

impl Transcoder {
    /// Live page URL -> Preview page URL.
    pub fn to_preview(&self, url: &str) -> Result<String, TranscodeError> {
        swap_environment(url, Environment::Live, Environment::Preview)
    }

    /// Preview page URL -> Live page URL.
    pub fn preview_to_live(&self, url: &str) -> Result<String, TranscodeError> {
        swap_environment(url, Environment::Preview, Environment::Live)
    }
}

fn swap_environment(url: &str, from: Environment, to: Environment) -> Result<String, TranscodeError> {
    let site = SiteUrl::parse(url)?;
    let found = site.environment();
    if found != from {
        return Err(TranscodeError::WrongEnvironment {
            expected: from,
            found,
        });
    }

    let mut segments = site.segments().to_vec();
    if let Some(first) = segments.first_mut() {
        let decoded = match from {
            Environment::Preview => LocaleToken::from_preview(first),
            _ => LocaleToken::from_live(first),
        };
        if let Some(locale) = decoded {
            *first = match to {
                Environment::Preview => locale.preview_token(),
                _ => locale.live_token(),
            };
        }
    }

    Ok(site.rebuild(&to.host_for(site.domain()), &segments))
}
