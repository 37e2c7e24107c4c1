//! Command-line interface for devboard.
//!
//! The CLI is the thin layer around the two transformation pipelines: it reads
//! raw input from a file or stdin, resolves context (link prefix, project) from
//! flags, environment and config, calls the pipeline, and prints the result.
//!
//! # Commands
//!
//! - `manifest` - resolve dependency versions in a `pom.xml`
//! - `reviews` - normalize a pull request list
//! - `config` - manage `~/.devboard/config.toml`
//!
//! # Global Options
//!
//! - `--verbose` / `-v`: debug logging
//! - `--quiet` / `-q`: no logging
//! - `--config` / `-c`: alternate config file (env: `DEVBOARD_CONFIG`)
//!
//! Logs go to stderr, results to stdout, so `devboard manifest pom.xml | jq` works.
//!
//! # Examples
//!
//! ```bash
//! devboard manifest pom.xml
//! devboard manifest - --format text < pom.xml
//! devboard reviews prs.json --project my-project --organization contoso
//! devboard reviews prs.json --project my-project --status completed --format text
//! devboard config init
//! ```

mod common;
mod config;
mod manifest;
mod reviews;

pub use common::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Runtime configuration derived from global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive; `None` disables logging.
    pub log_level: Option<String>,

    /// Alternate config file path.
    pub config_path: Option<PathBuf>,
}

/// Main CLI structure for devboard.
#[derive(Parser)]
#[command(
    name = "devboard",
    about = "Resolve build manifests and normalize pull requests for the project dashboard",
    version,
    long_about = "devboard turns raw service payloads into dashboard-ready JSON: \
                  Maven manifests with resolved dependency versions, and pull request \
                  lists with links and filtered reviewer names."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable all logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to an alternate config file
    #[arg(short, long, global = true, env = "DEVBOARD_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve dependency versions in a build manifest
    Manifest(manifest::ManifestCommand),

    /// Normalize a pull request list for display
    Reviews(reviews::ReviewsCommand),

    /// Manage the devboard configuration file
    Config(config::ConfigCommand),
}

impl Cli {
    /// Build the runtime configuration from global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit runtime configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Manifest(cmd) => cmd.execute().await,
            Commands::Reviews(cmd) => cmd.execute(config.config_path).await,
            Commands::Config(cmd) => cmd.execute(config.config_path).await,
        }
    }
}
