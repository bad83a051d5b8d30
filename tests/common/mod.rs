//! Shared test utilities and fixtures for the junit-report test suite.
//!
//! This module provides:
//! - The sample JUnit XML payload used across tests
//! - A temporary directory fixture that hands out report paths as strings
//! - A recording file store that counts calls and can be told to fail
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use parking_lot::RwLock;
use tempfile::TempDir;

use junit_report::junit::FileStore;

/// A small but complete JUnit XML document.
pub const SAMPLE_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?><testsuites>
  <testsuite name="example_1.tftest.hcl" tests="1" skipped="0" failures="0" errors="0">
    <testcase name="true_is_true" classname="example_1.tftest.hcl" time="0.005381209"></testcase>
  </testsuite>
</testsuites>"#;

// ============================================================================
// Temporary Directories
// ============================================================================

/// Temporary directory that is removed when dropped.
pub struct ReportDir {
    dir: TempDir,
}

impl ReportDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `name` inside the directory.
    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Absolute path of `name` as the string a user would pass.
    pub fn report_path(&self, name: &str) -> String {
        self.join(name).to_string_lossy().into_owned()
    }

    /// Number of entries in the directory.
    pub fn entry_count(&self) -> usize {
        std::fs::read_dir(self.dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

// ============================================================================
// Recording File Store
// ============================================================================

/// File store that records every write it receives.
#[derive(Default)]
pub struct RecordingStore {
    writes: RwLock<Vec<(PathBuf, Vec<u8>)>>,
    should_fail: AtomicBool,
    call_count: AtomicU32,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the store to fail all writes.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Number of times `write` was called, failed calls included.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Successful writes in call order.
    pub fn writes(&self) -> Vec<(PathBuf, Vec<u8>)> {
        self.writes.read().clone()
    }
}

impl FileStore for RecordingStore {
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::Other, "No space left on device"));
        }

        self.writes
            .write()
            .push((path.to_path_buf(), content.to_vec()));
        Ok(())
    }
}
