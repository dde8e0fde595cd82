//! `urlkit to-author|to-live|to-preview|preview-to-live` – environment conversion.

use urlkit_core::config::UrlkitConfig;
use urlkit_core::transcode::Direction;

/// Print one converted URL (or `None`) per input, in input order.
pub fn run_convert(cfg: &UrlkitConfig, direction: Direction, urls: &[String]) {
    let transcoder = cfg.transcoder();
    for line in render(&transcoder.convert_batch(direction, urls.iter().map(String::as_str))) {
        println!("{line}");
    }
}

fn render(converted: &[Option<String>]) -> Vec<String> {
    converted
        .iter()
        .map(|c| c.clone().unwrap_or_else(|| "None".to_string()))
        .collect()
}
