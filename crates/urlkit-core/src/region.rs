//! Region classifier: triage alternate-language URLs into geographic groups.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Geographic bucket. Declaration order is match order; `Us` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionGroup {
    Emea,
    Apac,
    Labr,
    Cn,
    Us,
}

impl RegionGroup {
    pub const ALL: [RegionGroup; 5] = [
        RegionGroup::Emea,
        RegionGroup::Apac,
        RegionGroup::Labr,
        RegionGroup::Cn,
        RegionGroup::Us,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RegionGroup::Emea => "EMEA",
            RegionGroup::Apac => "APAC",
            RegionGroup::Labr => "LABR",
            RegionGroup::Cn => "CN",
            RegionGroup::Us => "US",
        }
    }
}

impl fmt::Display for RegionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionGroup {
    type Err = String;

    /// Case-insensitive group name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionGroup::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown region group {s:?}"))
    }
}

const EMEA_CODES: &[&str] = &[
    "en-gb", "en-eu", "en-me", "it-it", "fr-fr", "pl-pl", "ru-ru", "es-es", "de-de", "tr-tr",
    "nb-no", "sv-se", "fi-fi", "da-dk", "nl-nl", "cs-cz", "fr-be", "de-at", "ro-ro",
];
const APAC_CODES: &[&str] = &[
    "en-in", "en-au", "en-sg", "en-ph", "en-my", "zh-tw", "ja-jp", "ko-kr", "id-id", "th-th",
    "vi-vn",
];
const LABR_CODES: &[&str] = &["es-la", "pt-br"];
const CN_CODES: &[&str] = &["zh-cn", ".cn"];

/// Region -> substrings that place a URL in that region. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCodeTable {
    entries: Vec<(RegionGroup, Vec<String>)>,
}

impl Default for RegionCodeTable {
    fn default() -> Self {
        let owned = |codes: &[&str]| -> Vec<String> { codes.iter().map(|c| c.to_string()).collect() };
        Self {
            entries: vec![
                (RegionGroup::Emea, owned(EMEA_CODES)),
                (RegionGroup::Apac, owned(APAC_CODES)),
                (RegionGroup::Labr, owned(LABR_CODES)),
                (RegionGroup::Cn, owned(CN_CODES)),
            ],
        }
    }
}

impl RegionCodeTable {
    /// Build from a map; entries are matched in `RegionGroup` order.
    pub fn from_map(map: BTreeMap<RegionGroup, Vec<String>>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }

    pub fn codes(&self, group: RegionGroup) -> &[String] {
        self.entries
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, codes)| codes.as_slice())
            .unwrap_or_default()
    }

    /// First group with a code contained in `url`, else `Us`.
    pub fn classify(&self, url: &str) -> RegionGroup {
        self.entries
            .iter()
            .find(|(_, codes)| codes.iter().any(|c| url.contains(c.as_str())))
            .map(|(g, _)| *g)
            .unwrap_or(RegionGroup::Us)
    }

    /// Partition `urls` into every group, keeping input order inside a group.
    pub fn partition<I, S>(&self, urls: I) -> RegionBuckets
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buckets = RegionBuckets::default();
        for url in urls {
            let url = url.into();
            let group = self.classify(&url);
            buckets.push(group, url);
        }
        buckets
    }
}

/// URLs per region group, always holding all groups in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionBuckets {
    buckets: Vec<(RegionGroup, Vec<String>)>,
}

impl Default for RegionBuckets {
    fn default() -> Self {
        Self {
            buckets: RegionGroup::ALL.iter().map(|g| (*g, Vec::new())).collect(),
        }
    }
}

impl RegionBuckets {
    fn push(&mut self, group: RegionGroup, url: String) {
        if let Some((_, urls)) = self.buckets.iter_mut().find(|(g, _)| *g == group) {
            urls.push(url);
        }
    }

    pub fn get(&self, group: RegionGroup) -> &[String] {
        self.buckets
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, urls)| urls.as_slice())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionGroup, &[String])> {
        self.buckets.iter().map(|(g, urls)| (*g, urls.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, urls)| urls.len()).sum()
    }
}
