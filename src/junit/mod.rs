//! JUnit XML report persistence.
//!
//! Rendering the XML is someone else's job. This module takes the finished
//! document, checks the destination, and writes it:
//!
//! - [`ReportWriter`] validates the path and performs the save
//! - [`FileStore`] is the filesystem capability the writer goes through
//! - [`OsFileStore`] and [`MemoryFileStore`] are the two built-in stores
//!
//! Outcomes come back as [`Diagnostics`](crate::diagnostics::Diagnostics).

pub mod store;
pub mod writer;

pub use store::{FileStore, MemoryFileStore, OsFileStore};
pub use writer::ReportWriter;
