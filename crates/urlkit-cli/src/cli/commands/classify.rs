//! `urlkit classify` – offline region grouping.

use urlkit_core::config::UrlkitConfig;
use urlkit_core::report;

pub fn run_classify(cfg: &UrlkitConfig, urls: &[String]) {
    let buckets = cfg.region_table().partition(urls.iter().cloned());
    print!("{}", report::region_blocks(&buckets));
}
