//! Core types and error handling for devboard
//!
//! This module holds the pieces shared by both transformation pipelines:
//!
//! - [`DevboardError`] - the error taxonomy (parse, schema, invalid record, config)
//! - [`ErrorContext`] / [`user_friendly_error`] - terminal-friendly error reporting
//! - [`Result`] - result alias used by the pure pipelines
//!
//! The pipelines themselves live in [`crate::manifest`], [`crate::resolver`] and
//! [`crate::review`]; they return [`Result`] and leave presentation to the caller.

pub mod error;

pub use error::{DevboardError, ErrorContext, Result, user_friendly_error};
