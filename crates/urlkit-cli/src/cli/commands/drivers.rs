//! `urlkit drivers --env origin|preview|live` – list driver download pages.

use anyhow::{Context, Result};
use urlkit_core::config::UrlkitConfig;
use urlkit_core::drivers::{self, DriverEnv};
use urlkit_core::report;

pub fn run_drivers(cfg: &UrlkitConfig, env: DriverEnv) -> Result<()> {
    let sections = drivers::driver_sections(env, &cfg.transcoder())
        .with_context(|| format!("build {env} driver pages"))?;
    print!("{}", report::drivers_text(&sections));
    Ok(())
}
