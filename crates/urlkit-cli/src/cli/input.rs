//! Reading URL batches from arguments, a file, or stdin.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, IsTerminal, Read};

use super::UrlInput;

/// Each non-blank line, trimmed, is one URL.
pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collect URLs from arguments and `--file`; read stdin when both are empty.
pub fn read_urls(input: &UrlInput) -> Result<Vec<String>> {
    let mut urls: Vec<String> = input
        .urls
        .iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect();

    if let Some(path) = &input.file {
        let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        urls.extend(parse_url_lines(&text));
    }

    if urls.is_empty() && input.file.is_none() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            anyhow::bail!("no URLs given (pass them as arguments, with --file, or on stdin)");
        }
        let mut text = String::new();
        stdin.lock().read_to_string(&mut text).context("read stdin")?;
        urls = parse_url_lines(&text);
    }

    tracing::debug!("read {} URLs", urls.len());
    Ok(urls)
}
