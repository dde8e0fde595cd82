//! Live <-> Author conversion.

use std::sync::OnceLock;

use regex::Regex;

use super::{TranscodeError, Transcoder, AUTHOR_HOME_PAGE, AUTHOR_PAGE_SUFFIX};
use crate::locale::LocaleToken;
use crate::url_model::{Environment, SiteUrl, AUTHOR_CONTENT_SEGMENT};

/// Author page grammar:
/// `<scheme>://author.<domain>/content/<brand>/<region>/<lang_REGION>/<section>/<path>.html[?query][#fragment]`
///
/// The page path stops at the first `.html` that ends the path.
fn author_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(https?)://author\.([^/?#]+)/content/([^/?#]+)/([a-z]{2})/([a-zA-Z_]{4,5})/([^/?#]+)/([^?#]+?)\.html(?:[?#]|$)",
        )
        .expect("author URL pattern is valid")
    })
}

impl Transcoder {
    /// Live page URL -> Author editing URL.
    ///
    /// A section landing page (one segment after the locale) gets `/home`
    /// appended; every result ends in `.html?wcmmode=disabled`.
    pub fn to_author(&self, url: &str) -> Result<String, TranscodeError> {
        let site = SiteUrl::parse(url)?;
        let env = site.environment();
        if env != Environment::Live {
            return Err(TranscodeError::WrongEnvironment {
                expected: Environment::Live,
                found: env,
            });
        }
        let locale = site
            .locale()
            .ok_or_else(|| TranscodeError::MissingLocale(url.to_string()))?;
        let remainder = site.path_remainder();
        if remainder.is_empty() {
            return Err(TranscodeError::MissingSection(url.to_string()));
        }

        let mut page = remainder.join("/");
        if site.is_root() {
            page.push('/');
            page.push_str(AUTHOR_HOME_PAGE);
        }
        Ok(format!(
            "{}://{}/{}/{}/{}/{}{}",
            site.scheme(),
            Environment::Author.host_for(site.domain()),
            AUTHOR_CONTENT_SEGMENT,
            self.brand_root,
            locale.author_token(),
            page,
            AUTHOR_PAGE_SUFFIX
        ))
    }

    /// Author editing URL -> Live page URL.
    ///
    /// Returns `None` when the input does not follow the Author page grammar
    /// or lives under a different content root.
    pub fn to_live(&self, url: &str) -> Option<String> {
        let caps = author_pattern().captures(url.trim())?;
        let scheme = &caps[1];
        let domain = &caps[2];
        if &caps[3] != self.brand_root {
            return None;
        }
        let locale = LocaleToken::from_author(&caps[4], &caps[5]);
        let section = &caps[6];
        let path = &caps[7];

        let live_host = Environment::Live.host_for(domain);
        let live_locale = locale.live_token();
        Some(if path == AUTHOR_HOME_PAGE {
            format!("{scheme}://{live_host}/{live_locale}/{section}/")
        } else {
            format!("{scheme}://{live_host}/{live_locale}/{section}/{path}/")
        })
    }
}
