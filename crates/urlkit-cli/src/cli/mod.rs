//! CLI for urlkit.

mod commands;
mod input;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use urlkit_core::config;
use urlkit_core::drivers::DriverEnv;
use urlkit_core::transcode::Direction;

use commands::{
    run_brand_urls, run_brands, run_classify, run_convert, run_drivers, run_regions, run_status,
    StatusOutput,
};
use input::read_urls;

/// Top-level CLI for urlkit.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: locale-aware URL conversion and link health checks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where to read URLs from. Falls back to stdin when neither is given.
#[derive(Debug, Clone, Default, Args)]
pub struct UrlInput {
    /// URLs to process.
    pub urls: Vec<String>,

    /// Read URLs from a file, one per line.
    #[arg(long, short, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert Live URLs to Author editing URLs.
    ToAuthor {
        #[command(flatten)]
        input: UrlInput,
    },

    /// Convert Author editing URLs to Live URLs (prints `None` for non-Author input).
    ToLive {
        #[command(flatten)]
        input: UrlInput,
    },

    /// Convert Live URLs to Preview URLs.
    ToPreview {
        #[command(flatten)]
        input: UrlInput,
    },

    /// Convert Preview URLs to Live URLs.
    PreviewToLive {
        #[command(flatten)]
        input: UrlInput,
    },

    /// Group URLs by region without fetching anything.
    Classify {
        #[command(flatten)]
        input: UrlInput,
    },

    /// Fetch each page's alternate-language links and group them by region.
    Regions {
        /// Page URLs to scrape.
        #[arg(required = true)]
        pages: Vec<String>,
    },

    /// Check URL status codes, following at most one 301 hop.
    Status {
        #[command(flatten)]
        input: UrlInput,

        /// Also write a `Status Code,URL` CSV to this path.
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Print the grouped report as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Check up to N URLs at once (default from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// List the enterprise and GeForce driver pages for an environment.
    Drivers {
        /// `origin`, `preview` or `live`.
        #[arg(long, default_value = "live")]
        env: DriverEnv,
    },

    /// List brand names found in the sitemap.
    Brands {
        /// Use the China sitemap instead of the global one.
        #[arg(long)]
        cn: bool,
    },

    /// List sitemap URLs that belong to a brand.
    BrandUrls {
        /// Brand (top-level section) name, e.g. `omniverse`.
        brand: String,

        /// Use the China sitemap instead of the global one.
        #[arg(long)]
        cn: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::ToAuthor { input } => {
                run_convert(&cfg, Direction::LiveToAuthor, &read_urls(&input)?)
            }
            CliCommand::ToLive { input } => {
                run_convert(&cfg, Direction::AuthorToLive, &read_urls(&input)?)
            }
            CliCommand::ToPreview { input } => {
                run_convert(&cfg, Direction::LiveToPreview, &read_urls(&input)?)
            }
            CliCommand::PreviewToLive { input } => {
                run_convert(&cfg, Direction::PreviewToLive, &read_urls(&input)?)
            }
            CliCommand::Classify { input } => run_classify(&cfg, &read_urls(&input)?),
            CliCommand::Regions { pages } => run_regions(&cfg, pages).await?,
            CliCommand::Status {
                input,
                csv,
                json,
                jobs,
            } => {
                let output = StatusOutput { csv, json };
                let jobs = jobs.unwrap_or(cfg.jobs);
                run_status(&cfg, read_urls(&input)?, jobs, &output).await?;
            }
            CliCommand::Drivers { env } => run_drivers(&cfg, env)?,
            CliCommand::Brands { cn } => run_brands(&cfg, cn).await?,
            CliCommand::BrandUrls { brand, cn } => run_brand_urls(&cfg, &brand, cn).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
