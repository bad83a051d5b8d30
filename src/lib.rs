//! # junit-report - Persist JUnit XML Reports
//!
//! junit-report writes an already rendered JUnit XML document to a path
//! chosen by the user. It does not build the XML and it does not run tests.
//! Its job is the last step: check the destination, write the bytes, and
//! tell the caller what happened.
//!
//! ## Core Concepts
//!
//! - **ReportWriter**: holds the destination path and performs the save
//! - **FileStore**: the filesystem capability the writer writes through
//! - **Diagnostics**: ordered, severity-tagged messages returned instead of
//!   errors; an empty collection means success
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use junit_report::prelude::*;
//!
//! let xml = br#"<?xml version="1.0" encoding="UTF-8"?><testsuites></testsuites>"#;
//! let diags = ReportWriter::new("junit.xml").save(xml);
//!
//! if let Some(err) = diags.err() {
//!     eprintln!("{}", err);
//!     std::process::exit(1);
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

// Re-export commonly used items in prelude
pub mod prelude {
    //! Convenient re-exports of commonly used types and traits.

    // Error handling
    pub use crate::error::{ReportError, Result};

    // Diagnostics
    pub use crate::diagnostics::{Diagnostic, Diagnostics, Severity};

    // Report persistence
    pub use crate::junit::{FileStore, MemoryFileStore, OsFileStore, ReportWriter};

    // Configuration
    pub use crate::config::Config;
}

// ============================================================================
// Error Handling
// ============================================================================

/// Error types for report persistence.
pub mod error;

// ============================================================================
// Diagnostics
// ============================================================================

/// Severity-tagged diagnostics returned by save operations.
pub mod diagnostics;

// ============================================================================
// Report Persistence
// ============================================================================

/// JUnit XML report writer and the file stores it writes through.
pub mod junit;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration file loading.
pub mod config;

// ============================================================================
// Version Information
// ============================================================================

/// Returns the current version of junit-report.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
