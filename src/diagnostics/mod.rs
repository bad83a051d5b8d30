//! Structured diagnostics for report persistence.
//!
//! A save attempt returns a [`Diagnostics`] collection instead of an error:
//!
//! - an **empty** collection means the report was written
//! - otherwise it holds an ordered list of [`Diagnostic`] entries, each with a
//!   [`Severity`], a one-line summary and a longer detail
//!
//! Callers decide what to do with it, typically by checking
//! [`Diagnostics::has_errors`] and picking an exit code.
//!
//! # Example
//!
//! ```rust
//! use junit_report::diagnostics::{Diagnostic, Diagnostics};
//!
//! let mut diags = Diagnostics::new();
//! diags.push(Diagnostic::warning("Report is empty", "No test cases were recorded."));
//! assert!(!diags.has_errors());
//!
//! diags.push(Diagnostic::error("Error saving JUnit XML report", "disk full"));
//! assert!(diags.has_errors());
//! assert!(diags.err().is_some());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ReportError;

/// Severity level for a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Something the caller should know about; the save still succeeded.
    Warning,
    /// The save did not happen.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single severity-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    severity: Severity,
    summary: String,
    detail: String,
}

impl Diagnostic {
    /// Create a diagnostic with an explicit severity.
    pub fn new(severity: Severity, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Create an error diagnostic.
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Error, summary, detail)
    }

    /// Create a warning diagnostic.
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Warning, summary, detail)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Summary and detail joined into one line.
    pub fn message(&self) -> String {
        if self.detail.is_empty() {
            self.summary.clone()
        } else {
            format!("{}: {}", self.summary, self.detail)
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message())
    }
}

impl From<ReportError> for Diagnostic {
    fn from(err: ReportError) -> Self {
        Diagnostic::error(err.summary(), err.detail())
    }
}

/// Ordered collection of diagnostics produced by one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty (successful) collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one diagnostic, keeping insertion order.
    pub fn push(&mut self, diagnostic: impl Into<Diagnostic>) {
        self.entries.push(diagnostic.into());
    }

    /// Move every entry of `other` onto the end of this collection.
    pub fn append(&mut self, mut other: Diagnostics) {
        self.entries.append(&mut other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Iterate only the error-level entries.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.is_error())
    }

    /// Returns true if any entry is an error.
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_error)
    }

    /// Returns true if any entry is a warning.
    pub fn has_warnings(&self) -> bool {
        self.entries
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// Collapse the error entries into a single error value.
    ///
    /// Returns `None` when there are no errors, even if warnings exist.
    pub fn err(&self) -> Option<ReportError> {
        let messages: Vec<String> = self.errors().map(Diagnostic::message).collect();
        match messages.len() {
            0 => None,
            1 => Some(ReportError::Aggregate(messages.into_iter().collect())),
            n => Some(ReportError::Aggregate(format!(
                "{} problems:\n\n- {}",
                n,
                messages.join("\n- ")
            ))),
        }
    }

    /// Convert into a `Result`, keeping warnings on the success side.
    pub fn into_result(self) -> std::result::Result<Diagnostics, ReportError> {
        match self.err() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

impl From<ReportError> for Diagnostics {
    fn from(err: ReportError) -> Self {
        let mut diags = Diagnostics::new();
        diags.push(err);
        diags
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_is_success() {
        let diags = Diagnostics::new();
        assert!(diags.is_empty());
        assert!(!diags.has_errors());
        assert!(diags.err().is_none());
    }

    #[test]
    fn test_warnings_are_not_errors() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::warning("heads up", ""));

        assert!(diags.has_warnings());
        assert!(!diags.has_errors());
        assert!(diags.err().is_none());
        assert_eq!(diags.into_result().map(|d| d.len()).ok(), Some(1));
    }

    #[test]
    fn test_order_is_preserved() {
        let mut first = Diagnostics::new();
        first.push(Diagnostic::warning("one", ""));
        let mut second = Diagnostics::new();
        second.push(Diagnostic::error("two", ""));
        second.push(Diagnostic::warning("three", ""));
        first.append(second);

        let summaries: Vec<&str> = first.iter().map(Diagnostic::summary).collect();
        assert_eq!(summaries, vec!["one", "two", "three"]);
        assert_eq!(first.errors().count(), 1);
    }

    #[test]
    fn test_err_joins_multiple_errors() {
        let diags: Diagnostics = vec![
            Diagnostic::error("first", "a"),
            Diagnostic::warning("ignored", ""),
            Diagnostic::error("second", "b"),
        ]
        .into_iter()
        .collect();

        let message = diags.err().expect("should have errors").to_string();
        assert!(message.starts_with("2 problems:"));
        assert!(message.contains("- first: a"));
        assert!(message.contains("- second: b"));
        assert!(!message.contains("ignored"));
    }

    #[test]
    fn test_from_report_error() {
        let diags = Diagnostics::from(ReportError::home_shorthand("~/x.xml"));
        assert_eq!(diags.len(), 1);
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.severity(), Severity::Error);
        assert!(diag.detail().contains("~/x.xml"));
    }

    #[test]
    fn test_message_without_detail() {
        let diag = Diagnostic::error("only summary", "");
        assert_eq!(diag.message(), "only summary");
        assert_eq!(diag.to_string(), "error: only summary");
    }

    #[test]
    fn test_serialize_json() {
        let diags = Diagnostics::from(ReportError::home_shorthand("~/x.xml"));
        let json = serde_json::to_value(&diags).unwrap();
        assert_eq!(json[0]["severity"], "error");
        assert_eq!(json[0]["summary"], "Invalid JUnit XML report path");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
    }
}
