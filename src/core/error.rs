//! Error handling for devboard
//!
//! This module provides the error taxonomy shared by the manifest resolver and the
//! review normalizer, plus the user-friendly reporting used by the CLI. The error
//! system follows two principles:
//! 1. **Strongly-typed errors** so callers can match on the exact failure
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`DevboardError`] - Enumerated error types for every failure case
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Error Categories
//!
//! - **Manifest input**: [`DevboardError::ManifestParseError`], [`DevboardError::SchemaError`]
//! - **Review input**: [`DevboardError::InvalidRecord`], [`DevboardError::InvalidReviewStatus`]
//! - **Configuration**: [`DevboardError::ConfigError`], [`DevboardError::TomlError`]
//! - **Plumbing**: [`DevboardError::IoError`], [`DevboardError::JsonError`]
//!
//! The transformation pipelines never log and never return partial output: an error
//! value is the whole result of a failed call.
//!
//! # Examples
//!
//! ```rust,no_run
//! use devboard_cli::core::{DevboardError, ErrorContext, user_friendly_error};
//!
//! let error = DevboardError::SchemaError {
//!     element: "project/dependencies".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for devboard operations
///
/// Each variant represents one specific failure mode and carries the details a
/// caller needs to report it: the name of the missing element, the index of the
/// offending record, or the path of the file that could not be read.
///
/// # Error Categories
///
/// ## Manifest Resolution
/// - [`ManifestParseError`] - The manifest text is not well-formed markup
/// - [`SchemaError`] - A required element is missing from the manifest
///
/// ## Review Normalization
/// - [`InvalidRecord`] - A review record lacks a field normalization depends on
/// - [`InvalidReviewStatus`] - Unknown review status filter
///
/// ## Configuration and Plumbing
/// - [`ConfigError`] - Configuration is missing or inconsistent
/// - [`IoError`], [`JsonError`], [`TomlError`] - Converted library errors
///
/// # Examples
///
/// ```rust,no_run
/// use devboard_cli::core::DevboardError;
///
/// fn handle_error(error: DevboardError) {
///     match error {
///         DevboardError::SchemaError { element } => {
///             eprintln!("Manifest is missing <{}>", element);
///         }
///         DevboardError::InvalidRecord { index, field } => {
///             eprintln!("Record #{} has no '{}'", index, field);
///         }
///         _ => eprintln!("Unexpected error: {}", error),
///     }
/// }
/// ```
///
/// [`ManifestParseError`]: DevboardError::ManifestParseError
/// [`SchemaError`]: DevboardError::SchemaError
/// [`InvalidRecord`]: DevboardError::InvalidRecord
/// [`InvalidReviewStatus`]: DevboardError::InvalidReviewStatus
/// [`ConfigError`]: DevboardError::ConfigError
/// [`IoError`]: DevboardError::IoError
/// [`JsonError`]: DevboardError::JsonError
/// [`TomlError`]: DevboardError::TomlError
#[derive(Error, Debug)]
pub enum DevboardError {
    /// Manifest text is not well-formed markup
    ///
    /// Raised for any syntax problem the markup parser reports: unclosed tags,
    /// mismatched end tags, stray text after the root element, or empty input.
    #[error("Invalid manifest syntax: {reason}")]
    ManifestParseError {
        /// Parser message, including the position of the problem
        reason: String,
    },

    /// Required manifest element is missing
    ///
    /// # Fields
    /// - `element`: Path of the missing element, e.g. `project/dependencies` or
    ///   `project/dependencies/dependency[2]/artifactId`
    #[error("Manifest is missing required element <{element}>")]
    SchemaError {
        /// Path of the missing element
        element: String,
    },

    /// Review record lacks a field that normalization depends on
    ///
    /// Normalization never guesses a value for a missing field; the whole batch
    /// fails and the offending record is identified by its position.
    #[error("Review record #{index} is missing required field '{field}'")]
    InvalidRecord {
        /// Zero-based position of the record within the batch
        index: usize,
        /// Dotted path of the missing field, e.g. `createdBy.displayName`
        field: String,
    },

    /// Unknown review status filter
    #[error("Invalid review status: {status}")]
    InvalidReviewStatus {
        /// The status string that was not recognized
        status: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl From<roxmltree::Error> for DevboardError {
    fn from(error: roxmltree::Error) -> Self {
        Self::ManifestParseError {
            reason: error.to_string(),
        }
    }
}

/// Result alias used by the transformation pipelines.
pub type Result<T> = std::result::Result<T, DevboardError>;

/// Error context wrapper that provides user-friendly error information
///
/// Couples a [`DevboardError`] with an optional suggestion and optional details,
/// rendered with terminal colors by [`ErrorContext::display`].
///
/// ```rust,no_run
/// use devboard_cli::core::{DevboardError, ErrorContext};
///
/// let context = ErrorContext::new(DevboardError::ConfigError {
///     message: "no link prefix".to_string(),
/// })
/// .with_suggestion("Pass --link-prefix or set AZURE_ORG")
/// .with_details("Review links are built from the service base URL");
///
/// println!("{}", context);
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DevboardError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: DevboardError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    ///
    /// Suggestions are actionable steps and are displayed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    ///
    /// Details are displayed in yellow, below the error itself.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`DevboardError`] anywhere in the error chain (so errors wrapped
/// with `anyhow::Context` still get tailored suggestions), plus bare
/// [`std::io::Error`] and [`serde_json::Error`] values. Anything else is reported
/// with its full cause chain.
///
/// ```rust,no_run
/// use devboard_cli::core::user_friendly_error;
///
/// let error = anyhow::anyhow!("Something went wrong");
/// let context = user_friendly_error(error);
/// context.display();
/// ```
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let outer = error.to_string();

    for cause in error.chain() {
        if let Some(devboard_error) = cause.downcast_ref::<DevboardError>() {
            return create_error_context(devboard_error, &outer);
        }
    }

    if let Some(io_error) = error.chain().find_map(|c| c.downcast_ref::<std::io::Error>()) {
        let context = ErrorContext::new(DevboardError::Other {
            message: render_chain(&error),
        });
        return match io_error.kind() {
            std::io::ErrorKind::NotFound => context
                .with_suggestion("Check that the input file exists and the path is correct"),
            std::io::ErrorKind::PermissionDenied => {
                context.with_suggestion("Check the file permissions of the input file")
            }
            _ => context,
        };
    }

    if error.chain().any(|c| c.downcast_ref::<serde_json::Error>().is_some()) {
        return ErrorContext::new(DevboardError::Other {
            message: render_chain(&error),
        })
        .with_suggestion(
            "Review input must be a JSON array of records or an object with a 'value' array",
        );
    }

    ErrorContext::new(DevboardError::Other {
        message: render_chain(&error),
    })
}

/// Render an error and its causes as a single message.
fn render_chain(error: &anyhow::Error) -> String {
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    message
}

fn create_error_context(error: &DevboardError, outer: &str) -> ErrorContext {
    let details_prefix = if outer == error.to_string() {
        String::new()
    } else {
        format!("{outer}. ")
    };

    match error {
        DevboardError::ManifestParseError { reason } => {
            ErrorContext::new(DevboardError::ManifestParseError {
                reason: reason.clone(),
            })
            .with_suggestion("Check that the manifest is well-formed XML: every tag closed, a single <project> root")
            .with_details(format!("{details_prefix}The manifest text could not be parsed as markup"))
        }

        DevboardError::SchemaError { element } => ErrorContext::new(DevboardError::SchemaError {
            element: element.clone(),
        })
        .with_suggestion(format!("Add <{}> to the manifest", leaf_name(element)))
        .with_details(format!(
            "{details_prefix}A manifest without a <dependencies> section is rejected; an empty <dependencies/> is accepted"
        )),

        DevboardError::InvalidRecord { index, field } => {
            ErrorContext::new(DevboardError::InvalidRecord {
                index: *index,
                field: field.clone(),
            })
            .with_suggestion(format!(
                "Check record #{index} in the input; '{field}' must be present on every pull request record"
            ))
            .with_details(format!(
                "{details_prefix}Normalization never fills in missing values, so the whole batch was rejected"
            ))
        }

        DevboardError::InvalidReviewStatus { status } => {
            ErrorContext::new(DevboardError::InvalidReviewStatus {
                status: status.clone(),
            })
            .with_suggestion("Use one of: active, completed, abandoned, all")
        }

        DevboardError::ConfigError { message } => ErrorContext::new(DevboardError::ConfigError {
            message: message.clone(),
        })
        .with_suggestion(
            "Pass --link-prefix, set AZURE_ORG, or add 'organization' to the config file (devboard config init)",
        ),

        other => ErrorContext::new(DevboardError::Other {
            message: if details_prefix.is_empty() {
                other.to_string()
            } else {
                format!("{outer}: {other}")
            },
        }),
    }
}

fn leaf_name(element: &str) -> &str {
    let leaf = element.rsplit('/').next().unwrap_or(element);
    leaf.split('[').next().unwrap_or(leaf)
}
