//! `devboard manifest`: resolve dependency versions in a build manifest.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fmt;
use std::path::PathBuf;

use super::common::{OutputFormat, input_name, read_input};
use crate::resolver::{ResolvedManifest, VersionResolution, resolve};

/// Command to resolve a manifest's dependencies.
#[derive(Args, Debug)]
pub struct ManifestCommand {
    /// Manifest file (`pom.xml`), or `-` for stdin
    input: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

impl ManifestCommand {
    pub async fn execute(self) -> Result<()> {
        let name = input_name(&self.input);
        let content = read_input(&self.input).await?;
        tracing::debug!("Read {} bytes from {}", content.len(), name);

        let resolved =
            resolve(&content).with_context(|| format!("Failed to resolve manifest {name}"))?;
        tracing::info!("Resolved {} dependencies from {}", resolved.dependencies.len(), name);

        for dep in resolved.unresolved() {
            if let VersionResolution::Unresolved { key } = &dep.resolution {
                tracing::warn!(
                    "Dependency '{}' references undeclared property '{}'; reported as \"{}\" (the manifest format cannot tell a missing property from an inherited one)",
                    dep.artifact_id,
                    key,
                    dep.version
                );
            }
        }

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
            OutputFormat::Text => print!("{}", ManifestListing(&resolved)),
        }

        Ok(())
    }
}

/// Human-readable listing of a resolved manifest.
struct ManifestListing<'a>(&'a ResolvedManifest);

impl fmt::Display for ManifestListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolved = self.0;

        match &resolved.parent {
            Some(parent) => {
                writeln!(f, "{} {} {}", "parent".bold(), parent.artifact_id.cyan(), parent.version)?;
            }
            None => writeln!(f, "{} {}", "parent".bold(), "(none)".bright_black())?,
        }

        if resolved.dependencies.is_empty() {
            return writeln!(f, "No dependencies declared.");
        }

        let width = resolved.dependencies.iter().map(|d| d.artifact_id.len()).max().unwrap_or(0);
        writeln!(f, "{}", "dependencies".bold())?;
        for dep in &resolved.dependencies {
            let version = match &dep.resolution {
                VersionResolution::Literal => dep.version.normal(),
                VersionResolution::Property { key } => {
                    format!("{} (${{{key}}})", dep.version).green()
                }
                VersionResolution::Default => dep.version.bright_black(),
                VersionResolution::Unresolved { key } => {
                    format!("{} (${{{key}}} undeclared)", dep.version).yellow()
                }
            };
            writeln!(f, "  {:<width$}  {}", dep.artifact_id, version)?;
        }

        Ok(())
    }
}
