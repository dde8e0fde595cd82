//! Tracing setup.
//!
//! The CLI logs to `$XDG_STATE_HOME/urlkit/urlkit.log` (append, no ANSI) so
//! report output on stdout stays clean. When the state directory cannot be
//! used, [`init_logging`] fails and the caller switches to
//! [`init_logging_stderr`].

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "urlkit.log";
const DEFAULT_FILTER: &str = "info,urlkit=debug,urlkit_core=debug";

/// `RUST_LOG` if set and valid, else [`DEFAULT_FILTER`].
fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Directory holding the log file.
pub fn log_dir() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(dirs.get_state_home().join("urlkit"))
}

/// Create `dir` if needed and open the log file in append mode.
fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok((file, path))
}

/// Install the global subscriber writing to the XDG state log file.
pub fn init_logging() -> Result<()> {
    let (file, path) = open_log_file(&log_dir()?)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;
    tracing::info!("urlkit logging initialized at {}", path.display());
    Ok(())
}

/// Install a stderr subscriber. A subscriber that is already installed wins.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
