//! devboard - command-line entry point
//!
//! Parses arguments, installs the log subscriber and runs the selected command.
//! Failures are reported through [`user_friendly_error`] and exit with status 1.

use anyhow::Result;
use clap::Parser;
use devboard_cli::cli;
use devboard_cli::core::user_friendly_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let config = cli.build_config();
    init_logging(config.log_level.as_deref());

    match cli.execute_with_config(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the level chosen by `--verbose`; with
/// `--quiet` (no level) nothing is installed at all.
fn init_logging(level: Option<&str>) {
    let Some(level) = level else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
