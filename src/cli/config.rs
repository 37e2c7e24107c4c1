//! `devboard config`: manage the configuration file.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::GlobalConfig;

/// Command to manage the devboard configuration file.
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Create an example config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the current configuration (default)
    Show,

    /// Print the config file location
    Path,
}

impl ConfigCommand {
    pub async fn execute(self, config_path: Option<PathBuf>) -> Result<()> {
        let path = match config_path {
            Some(path) => path,
            None => GlobalConfig::default_path()?,
        };

        match self.command {
            Some(ConfigSubcommands::Init {
                force,
            }) => Self::init(force, path).await,
            Some(ConfigSubcommands::Show) | None => Self::show(path).await,
            Some(ConfigSubcommands::Path) => {
                println!("{}", path.display());
                Ok(())
            }
        }
    }

    async fn init(force: bool, path: PathBuf) -> Result<()> {
        if path.exists() && !force {
            println!("❌ Config already exists at: {}", path.display());
            println!("   Use --force to overwrite");
            return Ok(());
        }

        let config = GlobalConfig::init_example();
        config.save_to(&path).await?;
        tracing::debug!("Wrote example config to {}", path.display());

        println!("✅ Created config at: {}", path.display());
        println!("\n{}", "Example configuration:".bold());
        println!("{}", toml::to_string_pretty(&config)?);
        println!("{}", "Next steps:".yellow());
        println!("  1. Replace 'your-organization' with your service organization");
        println!("  2. Or set 'base_url' for a self-hosted server");

        Ok(())
    }

    async fn show(path: PathBuf) -> Result<()> {
        let config = GlobalConfig::load_with_optional(Some(path.clone())).await?;

        println!("{}", "Configuration".bold());
        println!("Location: {}\n", path.display());

        if config == GlobalConfig::default() {
            println!("No settings configured.");
            println!("\n{}", "Tip:".yellow());
            println!("  Run 'devboard config init' to create an example configuration");
        } else {
            println!("{}", toml::to_string_pretty(&config)?);
            if let Some(prefix) = config.link_prefix() {
                println!("Link prefix: {prefix}");
            }
        }

        Ok(())
    }
}
