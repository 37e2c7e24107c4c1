//! devboard - project dashboard backend core
//!
//! Turns two kinds of raw payloads from a source-control/work-tracking service into
//! dashboard-ready data:
//!
//! - **Build manifests** (`pom.xml`): parsed into a typed tree, then dependency
//!   versions that reference `<properties>` are resolved.
//! - **Pull request lists**: reshaped into flat records with a synthesized web link
//!   and a display-safe reviewer list.
//!
//! Both pipelines are pure, synchronous functions of their input plus explicit
//! context (link prefix, project). They hold no state between calls, so they can
//! be called concurrently without coordination. Fetching payloads, authentication
//! and HTTP routing belong to the caller.
//!
//! # Core Modules
//!
//! - [`manifest`] - Manifest parsing into [`manifest::ManifestDocument`]
//! - [`resolver`] - Property-reference resolution of dependency versions
//! - [`review`] - Pull request normalization
//! - [`core`] - Error types and user-friendly error reporting
//!
//! # Supporting Modules
//!
//! - [`cli`] - The `devboard` command-line interface
//! - [`config`] - `~/.devboard/config.toml` and link-prefix resolution
//! - [`constants`] - Sentinel values and separators
//!
//! # Example
//!
//! ```rust,no_run
//! use devboard_cli::resolver::resolve;
//! use devboard_cli::review::{normalize, ReviewRecord};
//!
//! # fn example(pom: &str, records: &[ReviewRecord]) -> anyhow::Result<()> {
//! let manifest = resolve(pom)?;
//! println!("{}", serde_json::to_string_pretty(&manifest)?);
//!
//! let reviews = normalize(records, "https://dev.azure.com/contoso", "payments")?;
//! println!("{}", serde_json::to_string_pretty(&reviews)?);
//! # Ok(())
//! # }
//! ```

// Core functionality modules
pub mod core;
pub mod manifest;
pub mod resolver;
pub mod review;

// Supporting modules
pub mod cli;
pub mod config;
pub mod constants;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
