//! File store capability used by the report writer.
//!
//! The writer never touches `std::fs` directly. It goes through a
//! [`FileStore`], so tests can swap the real filesystem for a
//! [`MemoryFileStore`].

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::trace;

/// Destination for whole-file writes.
///
/// A write creates the file or truncates an existing one; it never appends
/// and never creates parent directories.
pub trait FileStore: Send + Sync {
    /// Write `content` to `path`, replacing any previous content.
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// File store backed by the operating system filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileStore;

impl FileStore for OsFileStore {
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        trace!(dst = %path.display(), size = %content.len(), "Writing file to disk");
        std::fs::write(path, content)
    }
}

/// In-memory file store.
///
/// Files are kept in insertion order. Writes to a path registered with
/// [`MemoryFileStore::fail_on`] return the configured error and leave the
/// store unchanged.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: RwLock<IndexMap<PathBuf, Vec<u8>>>,
    failures: RwLock<HashMap<PathBuf, io::ErrorKind>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `path` fail with `kind`.
    pub fn fail_on(&self, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        self.failures.write().insert(path.into(), kind);
    }

    /// Content stored at `path`, if any.
    pub fn read(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.read().get(path.as_ref()).cloned()
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.read().contains_key(path.as_ref())
    }

    /// Paths written so far, in first-write order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}

impl FileStore for MemoryFileStore {
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        if let Some(kind) = self.failures.read().get(path) {
            return Err(io::Error::new(
                *kind,
                format!("simulated write failure for {}", path.display()),
            ));
        }

        self.files
            .write()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}
