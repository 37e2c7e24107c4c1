//! Test utilities for devboard
//!
//! Logging setup and fixtures shared by unit tests and the integration suite
//! (enabled there through the `test-utils` feature).
//!
//! # Example
//!
//! ```rust,no_run
//! use devboard_cli::resolver::resolve;
//! use devboard_cli::test_utils::{ManifestFixture, init_test_logging};
//!
//! init_test_logging(None);
//! let resolved = resolve(&ManifestFixture::basic().content).unwrap();
//! assert_eq!(resolved.dependencies.len(), 2);
//! ```

pub mod fixtures;

pub use fixtures::{ManifestFixture, ReviewFixture};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. With `None`, logging is enabled only when
/// `RUST_LOG` is set:
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
