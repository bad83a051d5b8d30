//! Output formatting for the junit-report CLI
//!
//! Turns a save outcome into either coloured human-readable text or a single
//! JSON document.

use colored::Colorize;
use serde::Serialize;

use junit_report::diagnostics::{Diagnostic, Diagnostics, Severity};

/// JSON shape printed in `--output json` mode.
#[derive(Debug, Serialize)]
pub struct SaveReport<'a> {
    pub success: bool,
    pub path: &'a str,
    pub diagnostics: &'a Diagnostics,
}

/// Output formatter for the two output modes
pub struct OutputFormatter {
    /// Use colored output
    use_color: bool,
    /// JSON output mode
    json_mode: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(use_color: bool, json_mode: bool) -> Self {
        // Respect NO_COLOR environment variable
        let use_color = use_color && std::env::var("NO_COLOR").is_err();

        Self {
            use_color,
            json_mode,
        }
    }

    /// Print the outcome of a save. Human diagnostics go to stderr.
    pub fn save_outcome(&self, path: &str, diags: &Diagnostics) {
        if self.json_mode {
            println!("{}", self.render_json(path, diags));
            return;
        }

        for diag in diags {
            eprintln!("{}", self.render_diagnostic(diag));
        }

        if !diags.has_errors() {
            let message = format!("Saved JUnit XML report to {}", path);
            if self.use_color {
                println!("{}", message.green());
            } else {
                println!("{}", message);
            }
        }
    }

    /// Render the JSON document for a save outcome.
    pub fn render_json(&self, path: &str, diags: &Diagnostics) -> String {
        let report = SaveReport {
            success: !diags.has_errors(),
            path,
            diagnostics: diags,
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            serde_json::json!({ "success": false, "error": e.to_string() }).to_string()
        })
    }

    /// Render one diagnostic as `Error: summary` plus an indented detail.
    pub fn render_diagnostic(&self, diag: &Diagnostic) -> String {
        let label = match diag.severity() {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };

        let header = if self.use_color {
            let label = match diag.severity() {
                Severity::Error => label.red().bold(),
                Severity::Warning => label.yellow().bold(),
            };
            format!("{}: {}", label, diag.summary().bold())
        } else {
            format!("{}: {}", label, diag.summary())
        };

        if diag.detail().is_empty() {
            header
        } else {
            format!("{}\n\n  {}\n", header, diag.detail())
        }
    }
}
