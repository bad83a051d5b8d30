//! Configuration module for junit-report
//!
//! Settings come from two places, highest precedence first:
//! - Command-line arguments
//! - A TOML or JSON configuration file passed with `--config`
//!
//! The library itself never reads environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JUnit report settings
    pub junit: JUnitConfig,
}

/// Settings for the JUnit XML report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JUnitConfig {
    /// Where to write the report
    pub filename: Option<String>,
}

impl Config {
    /// Load from a specific file.
    ///
    /// The format follows the extension: `.json` is parsed as JSON, anything
    /// else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let config = match extension {
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
            _ => toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
        };

        Ok(config)
    }

    /// Load the file if one was given, otherwise use defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        match config_path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Pick the report destination: the CLI value wins over the file value.
    pub fn report_filename(&self, cli_override: Option<&str>) -> Option<String> {
        cli_override
            .map(str::to_string)
            .or_else(|| self.junit.filename.clone())
    }
}
