//! User-wide configuration (`~/.devboard/config.toml`).
//!
//! Holds the settings the dashboard would otherwise read from its environment:
//! the service organization and, for self-hosted servers, an explicit base URL.
//!
//! ```toml
//! organization = "my-org"
//! # base_url = "https://devops.example.com/tfs/DefaultCollection"
//! ```
//!
//! A missing file is not an error; defaults (all unset) are used instead.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_SERVICE_HOST};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Global configuration for devboard.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Service organization; the link prefix becomes `https://dev.azure.com/<organization>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Explicit service base URL. Takes precedence over `organization`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl GlobalConfig {
    /// Load from `path`, or from [`GlobalConfig::default_path`] when `None`.
    ///
    /// Returns the default configuration when the file does not exist.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };

        if path.exists() {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read global config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config from {}", path.display()))
    }

    /// Write to `path`, creating parent directories as needed.
    ///
    /// On Unix the file is restricted to the owner (mode `0600`).
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize global config")?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write global config to {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(path)
                .await
                .with_context(|| format!("Failed to read permissions for {}", path.display()))?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).await.with_context(|| {
                format!("Failed to set permissions on {}", path.display())
            })?;
        }

        Ok(())
    }

    /// Default location of the config file.
    ///
    /// - Unix/macOS: `~/.devboard/config.toml`
    /// - Windows: `%LOCALAPPDATA%\devboard\config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join(CONFIG_DIR_NAME.trim_start_matches('.'))
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(CONFIG_DIR_NAME)
        };

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// Link prefix derived from this configuration, if any.
    ///
    /// `base_url` wins over `organization`. Trailing slashes are trimmed.
    #[must_use]
    pub fn link_prefix(&self) -> Option<String> {
        if let Some(base_url) = self.base_url.as_deref().filter(|url| !url.trim().is_empty()) {
            return Some(trim_prefix(base_url));
        }

        self.organization
            .as_deref()
            .filter(|org| !org.trim().is_empty())
            .map(organization_prefix)
    }

    /// Example configuration written by `devboard config init`.
    #[must_use]
    pub fn init_example() -> Self {
        Self {
            organization: Some("your-organization".to_string()),
            base_url: None,
        }
    }
}

/// Link prefix for a hosted organization.
#[must_use]
pub fn organization_prefix(organization: &str) -> String {
    format!("{DEFAULT_SERVICE_HOST}/{}", organization.trim())
}

pub(crate) fn trim_prefix(prefix: &str) -> String {
    prefix.trim().trim_end_matches('/').to_string()
}
