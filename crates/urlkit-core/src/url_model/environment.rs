//! Environment inference from the host's leading label.

use std::fmt;

use serde::Serialize;

/// Which representation of a page a URL addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Internal authoring host (`author.`).
    Author,
    /// Public host (`www.` or a bare domain).
    Live,
    /// Pre-release host (`preview.`).
    Preview,
}

impl Environment {
    /// Leading host label used by this environment.
    pub fn host_label(self) -> &'static str {
        match self {
            Environment::Author => "author",
            Environment::Live => "www",
            Environment::Preview => "preview",
        }
    }

    /// Infer the environment from a host name. Anything that is not an
    /// `author.` or `preview.` host is Live.
    pub fn from_host(host: &str) -> Self {
        match host.split('.').next() {
            Some("author") => Environment::Author,
            Some("preview") => Environment::Preview,
            _ => Environment::Live,
        }
    }

    /// Host name for this environment on the given bare domain.
    pub fn host_for(self, domain: &str) -> String {
        format!("{}.{}", self.host_label(), domain)
    }
}

/// Strip a known environment label from the front of `host`.
pub fn bare_domain(host: &str) -> &str {
    for env in [Environment::Author, Environment::Live, Environment::Preview] {
        if let Some(rest) = host
            .strip_prefix(env.host_label())
            .and_then(|r| r.strip_prefix('.'))
        {
            if !rest.is_empty() {
                return rest;
            }
        }
    }
    host
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Author => "author",
            Environment::Live => "live",
            Environment::Preview => "preview",
        };
        f.write_str(name)
    }
}
