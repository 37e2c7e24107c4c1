//! `devboard reviews`: normalize a pull request list for display.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fmt;
use std::path::PathBuf;

use super::common::{OutputFormat, display_timestamp, input_name, read_input};
use crate::config::{GlobalConfig, has_prefix_override, resolve_link_prefix};
use crate::review::{NormalizedReview, ReviewBatch, ReviewStatus, normalize_matching};

/// Command to normalize pull requests.
#[derive(Args, Debug)]
pub struct ReviewsCommand {
    /// JSON file with pull request records (array or `{ "value": [...] }`), or `-` for stdin
    input: PathBuf,

    /// Project that contains the pull requests
    #[arg(short, long)]
    project: String,

    /// Base URL for pull request links (overrides organization and config)
    #[arg(long)]
    link_prefix: Option<String>,

    /// Service organization used to build the link prefix
    #[arg(short, long, env = "AZURE_ORG")]
    organization: Option<String>,

    /// Only keep records with this status (active, completed, abandoned, all)
    #[arg(short, long, default_value = "all")]
    status: ReviewStatus,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

impl ReviewsCommand {
    pub async fn execute(self, config_path: Option<PathBuf>) -> Result<()> {
        let config = if has_prefix_override(self.link_prefix.as_deref(), self.organization.as_deref()) {
            GlobalConfig::default()
        } else {
            GlobalConfig::load_with_optional(config_path).await?
        };
        let link_prefix = resolve_link_prefix(
            self.link_prefix.as_deref(),
            self.organization.as_deref(),
            &config,
        )?;
        tracing::debug!("Using link prefix {}", link_prefix);

        let name = input_name(&self.input);
        let content = read_input(&self.input).await?;
        let batch = ReviewBatch::from_json(&content)
            .with_context(|| format!("Failed to parse pull requests from {name}"))?;

        let records = batch.into_records();
        let reviews = normalize_matching(&records, self.status, &link_prefix, &self.project)
            .with_context(|| format!("Failed to normalize pull requests from {name}"))?;
        tracing::debug!("{} of {} records match status '{}'", reviews.len(), records.len(), self.status);
        tracing::info!("Normalized {} pull requests for project {}", reviews.len(), self.project);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reviews)?),
            OutputFormat::Text => print!("{}", ReviewListing(&reviews)),
        }

        Ok(())
    }
}

/// Human-readable listing of normalized pull requests.
struct ReviewListing<'a>(&'a [NormalizedReview]);

impl fmt::Display for ReviewListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No pull requests found.");
        }

        for review in self.0 {
            writeln!(f, "{}", review.title.bold())?;
            writeln!(f, "  {}", review.link.cyan())?;
            writeln!(
                f,
                "  by {} on {}",
                review.author_display_name,
                display_timestamp(&review.created_at)
            )?;
            match &review.completed_at {
                Some(completed) => {
                    writeln!(f, "  {} {}", "completed".green(), display_timestamp(completed))?;
                }
                None => writeln!(f, "  {}", "open".yellow())?,
            }
            if !review.reviewers.is_empty() {
                writeln!(f, "  reviewers: {}", review.reviewers)?;
            }
        }

        Ok(())
    }
}
