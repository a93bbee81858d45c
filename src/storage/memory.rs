//! In-process backend: records every byte and every physical write, and can be told to fail.

use super::{SinkHandle, StorageBackend};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Store {
    files: HashMap<PathBuf, Vec<u8>>,
    writes: HashMap<PathBuf, usize>,
    directories: HashSet<PathBuf>,
    deny_directories: HashSet<PathBuf>,
    deny_open: HashSet<PathBuf>,
    deny_write: HashSet<PathBuf>,
}

/// Cloning shares the same underlying store, so a test can keep one clone for
/// inspection while the logger owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    store: Arc<Mutex<Store>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything appended to `path` so far, lossily decoded.
    #[must_use]
    pub fn contents(&self, path: impl AsRef<Path>) -> String {
        self.store
            .lock()
            .files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default()
    }

    /// Number of physical `write` calls that reached `path`.
    #[must_use]
    pub fn write_count(&self, path: impl AsRef<Path>) -> usize {
        self.store
            .lock()
            .writes
            .get(path.as_ref())
            .copied()
            .unwrap_or(0)
    }

    /// Whether a file was ever opened (created) at `path`.
    #[must_use]
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let store = self.store.lock();
        store.files.contains_key(path) || store.directories.contains(path)
    }

    /// Makes `create_directories(path)` fail with `PermissionDenied`.
    pub fn deny_directory(&self, path: impl Into<PathBuf>) {
        self.store.lock().deny_directories.insert(path.into());
    }

    /// Makes `open_append(path)` fail with `PermissionDenied`.
    pub fn deny_open(&self, path: impl Into<PathBuf>) {
        self.store.lock().deny_open.insert(path.into());
    }

    /// Makes writes through handles for `path` fail, including handles already open.
    pub fn deny_write(&self, path: impl Into<PathBuf>) {
        self.store.lock().deny_write.insert(path.into());
    }

    /// Lifts every injected failure.
    pub fn allow_all(&self) {
        let mut store = self.store.lock();
        store.deny_directories.clear();
        store.deny_open.clear();
        store.deny_write.clear();
    }
}

fn denied() -> io::Error {
    io::Error::from(io::ErrorKind::PermissionDenied)
}

impl StorageBackend for MemoryBackend {
    fn create_directories(&self, path: &Path) -> io::Result<()> {
        let mut store = self.store.lock();
        if store.deny_directories.contains(path) {
            return Err(denied());
        }
        store.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn open_append(&self, path: &Path) -> io::Result<Box<dyn SinkHandle>> {
        let mut store = self.store.lock();
        if store.deny_open.contains(path) {
            return Err(denied());
        }
        store.files.entry(path.to_path_buf()).or_default();
        Ok(Box::new(MemoryHandle {
            store: Arc::clone(&self.store),
            path: path.to_path_buf(),
        }))
    }
}

struct MemoryHandle {
    store: Arc<Mutex<Store>>,
    path: PathBuf,
}

impl SinkHandle for MemoryHandle {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut store = self.store.lock();
        if store.deny_write.contains(&self.path) {
            return Err(denied());
        }
        store
            .files
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(bytes);
        *store.writes.entry(self.path.clone()).or_insert(0) += 1;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        Ok(())
    }
}
