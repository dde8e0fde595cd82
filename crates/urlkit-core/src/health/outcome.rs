//! Per-URL outcomes and their first-seen-order grouping.

use std::fmt;

use serde::{Serialize, Serializer};

/// Status code that triggers the single extra hop.
pub const PERMANENT_REDIRECT: u32 = 301;

/// What a URL resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusOutcome {
    /// Bare status of the first response.
    Status(u32),
    /// `301` whose `Location` target answered with the given status.
    Redirected(u32),
    /// Transport failure on either hop.
    Error,
}

impl fmt::Display for StatusOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusOutcome::Status(code) => write!(f, "{code}"),
            StatusOutcome::Redirected(code) => write!(f, "{PERMANENT_REDIRECT} -> {code}"),
            StatusOutcome::Error => f.write_str("Error"),
        }
    }
}

impl Serialize for StatusOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One checked URL. `display` carries the `" -> <target>"` annotation for
/// redirect chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlStatus {
    pub display: String,
    pub outcome: StatusOutcome,
}

/// A group of URLs sharing one outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusGroup {
    pub status: StatusOutcome,
    pub urls: Vec<String>,
}

/// Outcome -> URLs, groups in first-seen order, URLs in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusGroups {
    groups: Vec<StatusGroup>,
}

impl StatusGroups {
    pub fn push(&mut self, entry: UrlStatus) {
        match self.groups.iter_mut().find(|g| g.status == entry.outcome) {
            Some(group) => group.urls.push(entry.display),
            None => self.groups.push(StatusGroup {
                status: entry.outcome,
                urls: vec![entry.display],
            }),
        }
    }

    pub fn get(&self, status: &StatusOutcome) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| &g.status == status)
            .map(|g| g.urls.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusGroup> {
        self.groups.iter()
    }

    /// Flattened `(outcome, url)` rows in group order.
    pub fn rows(&self) -> impl Iterator<Item = (&StatusOutcome, &str)> {
        self.groups
            .iter()
            .flat_map(|g| g.urls.iter().map(move |u| (&g.status, u.as_str())))
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of URLs across all groups.
    pub fn url_count(&self) -> usize {
        self.groups.iter().map(|g| g.urls.len()).sum()
    }
}

impl FromIterator<UrlStatus> for StatusGroups {
    fn from_iter<T: IntoIterator<Item = UrlStatus>>(iter: T) -> Self {
        let mut groups = StatusGroups::default();
        for entry in iter {
            groups.push(entry);
        }
        groups
    }
}
