use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::{HttpOptions, DEFAULT_TIMEOUT_SECS};
use crate::region::{RegionCodeTable, RegionGroup};
use crate::transcode::{Transcoder, DEFAULT_BRAND_ROOT};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Global configuration loaded from `~/.config/urlkit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlkitConfig {
    /// Content root under `/content/` on the Author host.
    pub brand_root: String,
    /// Per-request timeout for HEAD probes and document fetches.
    pub request_timeout_secs: u64,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Default number of URLs checked at once by `status`.
    pub jobs: usize,
    /// Sitemap of the global (`en-us`) site.
    pub sitemap_url: String,
    /// Sitemap of the China site (paths carry no locale segment).
    pub cn_sitemap_url: String,
    /// Optional replacement for the built-in region code table, keyed by
    /// group name (`EMEA`, `APAC`, `LABR`, `CN`, `US`).
    pub region_codes: Option<BTreeMap<String, Vec<String>>>,
}

impl Default for UrlkitConfig {
    fn default() -> Self {
        Self {
            brand_root: DEFAULT_BRAND_ROOT.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            jobs: 1,
            sitemap_url: "https://www.nvidia.com/en-us/en-us.sitemap.xml".to_string(),
            cn_sitemap_url: "https://www.nvidia.cn/zh-cn.sitemap.xml".to_string(),
            region_codes: None,
        }
    }
}

impl UrlkitConfig {
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
            user_agent: Some(self.user_agent.clone()).filter(|ua| !ua.is_empty()),
        }
    }

    pub fn transcoder(&self) -> Transcoder {
        Transcoder::new(self.brand_root.clone())
    }

    pub fn region_table(&self) -> RegionCodeTable {
        let Some(entries) = &self.region_codes else {
            return RegionCodeTable::default();
        };
        let mut map = BTreeMap::new();
        for (name, codes) in entries {
            match name.parse::<RegionGroup>() {
                Ok(group) => {
                    map.insert(group, codes.clone());
                }
                Err(e) => tracing::warn!("ignoring region_codes entry: {e}"),
            }
        }
        let table = RegionCodeTable::from_map(map);
        for group in RegionGroup::ALL {
            tracing::debug!("region {group}: {} codes", table.codes(group).len());
        }
        table
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlkitConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UrlkitConfig> {
    if !path.exists() {
        let default_cfg = UrlkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UrlkitConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
