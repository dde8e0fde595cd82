//! HEAD probing with redirects disabled.

use std::str;

use thiserror::Error;

use super::parse;
use crate::fetch::HttpOptions;

/// Status and redirect target of one HEAD response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadResponse {
    pub status: u32,
    /// `Location` header value, if present.
    pub location: Option<String>,
}

impl HeadResponse {
    pub fn new(status: u32) -> Self {
        Self {
            status,
            location: None,
        }
    }

    pub fn redirect(status: u32, location: impl Into<String>) -> Self {
        Self {
            status,
            location: Some(location.into()),
        }
    }
}

/// Coarse failure class, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Connection,
    Other,
}

/// Transport-level failure: no HTTP status was obtained.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Curl(#[from] curl::Error),
    #[error("{0}")]
    Transport(String),
}

impl ProbeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ProbeError::Curl(e) => classify_curl_error(e),
            ProbeError::Transport(_) => FailureKind::Other,
        }
    }
}

/// Classify a curl error for log output.
pub fn classify_curl_error(e: &curl::Error) -> FailureKind {
    if e.is_operation_timedout() {
        return FailureKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_ssl_connect_error()
    {
        return FailureKind::Connection;
    }
    FailureKind::Other
}

/// Issues a single header-only request without following redirects.
///
/// Implemented by the libcurl probe and by canned probes in tests.
pub trait Probe {
    fn head(&self, url: &str) -> Result<HeadResponse, ProbeError>;
}

impl<P: Probe + ?Sized> Probe for &P {
    fn head(&self, url: &str) -> Result<HeadResponse, ProbeError> {
        (**self).head(url)
    }
}

/// libcurl-backed probe: `HEAD`, no redirect following, bounded timeout.
#[derive(Debug, Clone, Default)]
pub struct CurlProbe {
    opts: HttpOptions,
}

impl CurlProbe {
    pub fn new(opts: HttpOptions) -> Self {
        Self { opts }
    }
}

impl Probe for CurlProbe {
    fn head(&self, url: &str) -> Result<HeadResponse, ProbeError> {
        let mut lines: Vec<String> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(false)?;
        self.opts.apply(&mut easy)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if status == 0 {
            return Err(ProbeError::Transport(format!("no HTTP status from {url}")));
        }
        Ok(parse::parse_head(status, &lines))
    }
}
