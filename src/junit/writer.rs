//! Persists a rendered JUnit XML report to a user-supplied path.

use std::path::Path;

use tracing::{debug, info};

use super::store::{FileStore, OsFileStore};
use crate::diagnostics::Diagnostics;
use crate::error::ReportError;

/// Writes one finished JUnit XML document to `filename`.
///
/// The payload is treated as opaque bytes and written verbatim. The only
/// path check done up front is the home-directory shorthand (`~`), which is
/// rejected because the writer never expands it. Everything else (empty
/// paths, missing directories, permissions) is left to the file store and
/// reported as a write failure.
///
/// # Example
///
/// ```rust,no_run
/// use junit_report::junit::ReportWriter;
///
/// let xml = br#"<?xml version="1.0" encoding="UTF-8"?><testsuites></testsuites>"#;
/// let diags = ReportWriter::new("test-results/junit.xml").save(xml);
/// if diags.has_errors() {
///     for diag in diags.errors() {
///         eprintln!("{}", diag);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportWriter {
    filename: String,
}

impl ReportWriter {
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    /// The destination exactly as supplied.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Check the destination without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidPath`] if the path starts with `~`.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.filename.starts_with('~') {
            return Err(ReportError::home_shorthand(&self.filename));
        }
        Ok(())
    }

    /// Write `payload` to the real filesystem.
    pub fn save(&self, payload: &[u8]) -> Diagnostics {
        self.save_with(&OsFileStore, payload)
    }

    /// Write `payload` through `store`.
    ///
    /// Returns an empty collection on success, or exactly one error
    /// diagnostic. On an invalid path the store is never called.
    pub fn save_with(&self, store: &dyn FileStore, payload: &[u8]) -> Diagnostics {
        debug!(path = %self.filename, bytes = payload.len(), "Saving JUnit XML report");

        if let Err(err) = self.validate() {
            debug!(path = %self.filename, "Rejected JUnit XML report path");
            return Diagnostics::from(err);
        }

        match store.write(Path::new(&self.filename), payload) {
            Ok(()) => {
                info!(path = %self.filename, bytes = payload.len(), "Saved JUnit XML report");
                Diagnostics::new()
            }
            Err(e) => {
                debug!(path = %self.filename, error = %e, "Failed to save JUnit XML report");
                Diagnostics::from(ReportError::write_failure(&self.filename, e))
            }
        }
    }
}
