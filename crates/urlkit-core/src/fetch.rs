//! Blocking HTTP GET for collaborator documents (sitemaps, pages).
//!
//! Uses the curl crate (libcurl). Runs in the current thread; call from
//! `spawn_blocking` if used from async code.

use anyhow::{Context, Result};
use std::time::Duration;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Settings shared by every outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
    pub timeout: Duration,
    /// Sent as `User-Agent` when set.
    pub user_agent: Option<String>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl HttpOptions {
    pub(crate) fn apply(&self, easy: &mut curl::easy::Easy) -> Result<(), curl::Error> {
        easy.timeout(self.timeout)?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }
        Ok(())
    }
}

/// GET `url` following redirects and return the body as text.
///
/// Non-2xx responses are errors.
pub fn fetch_text(url: &str, opts: &HttpOptions) -> Result<String> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    opts.apply(&mut easy)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("GET {url} failed"))?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }
    tracing::debug!("fetched {} ({} bytes)", url, body.len());

    Ok(String::from_utf8_lossy(&body).into_owned())
}
