//! Configuration management for devboard
//!
//! The transformation pipelines take all of their context as explicit parameters;
//! this module is where the CLI finds values for those parameters.
//!
//! # Link Prefix Resolution
//!
//! Review links need the service's base URL. [`resolve_link_prefix`] picks the
//! first available of:
//!
//! 1. An explicit `--link-prefix`
//! 2. An organization from `--organization` or the `AZURE_ORG` environment variable
//! 3. `base_url` from the config file
//! 4. `organization` from the config file
//!
//! The result has trailing slashes trimmed and is then passed, as a plain string,
//! to [`crate::review::normalize`].
//!
//! # Configuration File
//!
//! See [`GlobalConfig`] for the file format. Its location can be overridden with
//! `--config` or `DEVBOARD_CONFIG`.

mod global;

pub use global::{GlobalConfig, organization_prefix};

use crate::core::DevboardError;

/// Pick the link prefix for review links.
///
/// # Errors
///
/// [`DevboardError::ConfigError`] when no source provides a prefix.
pub fn resolve_link_prefix(
    explicit: Option<&str>,
    organization: Option<&str>,
    config: &GlobalConfig,
) -> Result<String, DevboardError> {
    if let Some(prefix) = non_blank(explicit) {
        return Ok(global::trim_prefix(prefix));
    }

    if let Some(org) = non_blank(organization) {
        return Ok(organization_prefix(org));
    }

    config.link_prefix().ok_or_else(|| DevboardError::ConfigError {
        message: "no link prefix configured".to_string(),
    })
}

/// Whether a flag or environment value decides the link prefix on its own.
///
/// When it does, the config file is never consulted, so it need not be loaded
/// (or even be valid).
#[must_use]
pub fn has_prefix_override(explicit: Option<&str>, organization: Option<&str>) -> bool {
    non_blank(explicit).is_some() || non_blank(organization).is_some()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
