//! CLI module for junit-report
//!
//! Argument parsing and the single `save` flow: read a rendered payload,
//! hand it to [`ReportWriter`], print the diagnostics, pick an exit code.

pub mod output;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

use junit_report::config::Config;
use junit_report::diagnostics::Diagnostics;
use junit_report::junit::ReportWriter;

use output::OutputFormatter;

/// Exit code when the report was saved.
pub const EXIT_OK: i32 = 0;
/// Exit code when the save produced error diagnostics.
pub const EXIT_DIAGNOSTICS: i32 = 1;
/// Exit code for usage, config, and input errors.
pub const EXIT_USAGE: i32 = 2;

/// junit-report - persist a rendered JUnit XML report
///
/// Reads a finished JUnit XML document from a file or stdin and writes it to
/// the destination path.
#[derive(Parser, Debug, Clone)]
#[command(name = "junit-report")]
#[command(version)]
#[command(about = "Persist a rendered JUnit XML report to a file", long_about = None)]
pub struct Cli {
    /// File holding the rendered report (`-` or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Destination path for the JUnit XML report
    #[arg(long = "junit-xml", value_name = "PATH")]
    pub junit_xml: Option<String>,

    /// Path to configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(long, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the effective verbosity level (0-3)
    pub fn verbosity(&self) -> u8 {
        self.verbose.min(3)
    }

    /// Check if JSON output is requested
    pub fn is_json(&self) -> bool {
        matches!(self.output, OutputFormat::Json)
    }

    /// Run the save and return the process exit code.
    ///
    /// Usage, config and input problems come back as `Err`; problems with the
    /// save itself are printed as diagnostics.
    pub fn execute(&self) -> Result<i32> {
        let config = Config::load(self.config.as_ref())?;
        let Some(filename) = config.report_filename(self.junit_xml.as_deref()) else {
            bail!("No report destination given; pass --junit-xml or set junit.filename in the config file");
        };

        let writer = ReportWriter::new(filename);
        let formatter = OutputFormatter::new(!self.no_color, self.is_json());

        // Reject the destination before blocking on stdin.
        if let Err(err) = writer.validate() {
            formatter.save_outcome(writer.filename(), &Diagnostics::from(err));
            return Ok(EXIT_DIAGNOSTICS);
        }

        let payload = self.read_payload()?;
        debug!(path = %writer.filename(), bytes = payload.len(), "Read report payload");

        let diags = writer.save(&payload);
        formatter.save_outcome(writer.filename(), &diags);

        Ok(if diags.has_errors() {
            EXIT_DIAGNOSTICS
        } else {
            EXIT_OK
        })
    }

    fn read_payload(&self) -> Result<Vec<u8>> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read(path)
                .with_context(|| format!("Failed to read report input: {}", path.display())),
            _ => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .context("Failed to read report input from stdin")?;
                Ok(buf)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["junit-report", "--junit-xml", "out.xml", "in.xml"]).unwrap();
        assert_eq!(cli.junit_xml.as_deref(), Some("out.xml"));
        assert_eq!(cli.input, Some(PathBuf::from("in.xml")));
        assert_eq!(cli.output, OutputFormat::Human);
        assert!(!cli.is_json());
    }

    #[test]
    fn test_verbosity_is_capped() {
        let cli = Cli::try_parse_from(["junit-report", "-vvvvv"]).unwrap();
        assert_eq!(cli.verbosity(), 3);
    }

    #[test]
    fn test_json_output_flag() {
        let cli = Cli::try_parse_from(["junit-report", "--output", "json"]).unwrap();
        assert!(cli.is_json());
    }

    #[test]
    fn test_invalid_output_format() {
        assert!(Cli::try_parse_from(["junit-report", "--output", "yaml"]).is_err());
    }

    #[test]
    fn test_missing_destination_is_error() {
        let cli = Cli::try_parse_from(["junit-report", "in.xml"]).unwrap();
        let err = cli.execute().unwrap_err();
        assert!(err.to_string().contains("No report destination"));
    }
}
