//! Error types for junit-report.
//!
//! Saving a report never panics and never hands a raw [`std::io::Error`] to
//! the caller. Failures are described by [`ReportError`] and then folded into
//! a [`Diagnostics`](crate::diagnostics::Diagnostics) collection.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for junit-report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// The error taxonomy for persisting a report.
#[derive(Error, Debug)]
pub enum ReportError {
    // ========================================================================
    // Path Errors
    // ========================================================================
    /// The destination uses notation the writer does not expand.
    #[error("Invalid path '{}': {reason}", .path.display())]
    InvalidPath {
        /// Path as supplied by the user
        path: PathBuf,
        /// Why the path was rejected
        reason: String,
    },

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// The file store failed to write the report.
    #[error("Failed to write JUnit XML report to '{}': {source}", .path.display())]
    WriteFailure {
        /// Destination path
        path: PathBuf,
        /// Underlying system error
        #[source]
        source: std::io::Error,
    },

    // ========================================================================
    // Other Errors
    // ========================================================================
    /// Several error diagnostics collapsed into one error value.
    #[error("{0}")]
    Aggregate(String),
}

impl ReportError {
    /// Creates an invalid path error for a home-directory shorthand.
    pub fn home_shorthand(path: impl Into<PathBuf>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: "paths starting with '~' are not expanded; use an absolute or relative path"
                .to_string(),
        }
    }

    /// Creates a write failure wrapping the underlying IO error.
    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the caller can fix the input and retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ReportError::InvalidPath { .. })
    }

    /// Short, stable summary line used when this error becomes a diagnostic.
    pub fn summary(&self) -> &'static str {
        match self {
            ReportError::InvalidPath { .. } => "Invalid JUnit XML report path",
            ReportError::WriteFailure { .. } => "Error saving JUnit XML report",
            ReportError::Aggregate(_) => "Multiple errors",
        }
    }

    /// Longer explanation, including the system message for IO failures.
    pub fn detail(&self) -> String {
        match self {
            ReportError::InvalidPath { path, reason } => {
                format!("The path '{}' is not supported: {}.", path.display(), reason)
            }
            ReportError::WriteFailure { path, source } => {
                format!("Could not write to '{}': {}", path.display(), source)
            }
            ReportError::Aggregate(message) => message.clone(),
        }
    }
}
