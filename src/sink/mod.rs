//! One append-only text destination: a directory, a filename, and a lazily opened handle.
//!
//! Path and filename are frozen while the handle is open, so a record can never
//! straddle two files.

use crate::error::Error;
use crate::internal;
use crate::storage::{SinkHandle, StorageBackend};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where a sink is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkState {
    /// The filename has never been validated against the directory.
    Unconfigured,
    /// Path and filename validated, handle never opened.
    Configured,
    /// Handle open; path and filename are frozen.
    Open,
    /// Handle closed after having been open.
    Closed,
}

pub struct Sink {
    dir: PathBuf,
    filename: String,
    state: SinkState,
    handle: Option<Box<dyn SinkHandle>>,
    backend: Arc<dyn StorageBackend>,
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("dir", &self.dir)
            .field("filename", &self.filename)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Sink {
    /// Nothing touches storage until the sink is configured or opened.
    #[must_use]
    pub fn new(
        dir: impl Into<PathBuf>,
        filename: impl Into<String>,
        backend: Arc<dyn StorageBackend>,
    ) -> Self {
        Self {
            dir: dir.into(),
            filename: filename.into(),
            state: SinkState::Unconfigured,
            handle: None,
            backend,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// `path/filename`: the file records are appended to.
    #[must_use]
    pub fn full_path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    #[must_use]
    pub const fn state(&self) -> SinkState {
        self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Creates `dir` if needed and makes it the sink's directory.
    ///
    /// # Errors
    /// `AlreadyOpen` while the handle is open, `DirectoryCreationFailed` if the
    /// backend can't create the directory. The stored path is untouched on error.
    pub fn set_path(&mut self, dir: impl AsRef<Path>) -> Result<(), Error> {
        if self.is_open() {
            return Err(Error::AlreadyOpen);
        }

        let dir = dir.as_ref();
        if let Err(e) = self.backend.create_directories(dir) {
            internal::error(
                "SINK",
                &format!("Failed to create directory {}: {e}", dir.display()),
            );
            return Err(Error::DirectoryCreationFailed {
                path: dir.to_path_buf(),
                source: Arc::new(e),
            });
        }

        dir.clone_into(&mut self.dir);
        internal::debug("SINK", &format!("Path set to {}", self.dir.display()));
        Ok(())
    }

    /// Validates that `path/name` can be appended to, then makes `name` the sink's filename.
    ///
    /// The probe opens and immediately closes the file, so it exists afterwards.
    ///
    /// # Errors
    /// `AlreadyOpen` while the handle is open, `InvalidName` for an empty name,
    /// `FileCreationFailed` if the probe fails. The stored filename is untouched on error.
    pub fn set_filename(&mut self, name: &str) -> Result<(), Error> {
        if self.is_open() {
            return Err(Error::AlreadyOpen);
        }
        if name.is_empty() {
            return Err(Error::InvalidName);
        }

        let candidate = self.dir.join(name);
        let probe = self
            .backend
            .open_append(&candidate)
            .and_then(|handle| handle.close());
        if let Err(e) = probe {
            internal::error(
                "SINK",
                &format!("Cannot create {}: {e}", candidate.display()),
            );
            return Err(Error::FileCreationFailed {
                path: candidate,
                source: Arc::new(e),
            });
        }

        name.clone_into(&mut self.filename);
        if self.state == SinkState::Unconfigured {
            self.state = SinkState::Configured;
        }
        internal::debug("SINK", &format!("Filename set to {name}"));
        Ok(())
    }

    /// Opens the handle in append mode; a no-op when already open.
    ///
    /// # Errors
    /// `CannotOpen` if the backend refuses.
    pub fn ensure_open(&mut self) -> Result<(), Error> {
        if self.is_open() {
            return Ok(());
        }

        let path = self.full_path();
        match self.backend.open_append(&path) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.state = SinkState::Open;
                internal::debug("SINK", &format!("Opened {}", path.display()));
                Ok(())
            }
            Err(e) => {
                internal::error("SINK", &format!("Cannot open {}: {e}", path.display()));
                Err(Error::CannotOpen {
                    path,
                    source: Arc::new(e),
                })
            }
        }
    }

    /// Releases the handle, unfreezing path and filename.
    ///
    /// # Errors
    /// `NotOpen` if there is no handle; `WriteFailed` if the final flush fails
    /// (the sink is closed either way).
    pub fn close(&mut self) -> Result<(), Error> {
        let Some(handle) = self.handle.take() else {
            return Err(Error::NotOpen);
        };
        self.state = SinkState::Closed;
        handle.close().map_err(|e| Error::WriteFailed {
            path: self.full_path(),
            source: Arc::new(e),
        })?;
        internal::debug("SINK", &format!("Closed {}", self.full_path().display()));
        Ok(())
    }

    /// Appends `bytes` and flushes them to the OS, opening the handle first if needed.
    ///
    /// # Errors
    /// `CannotOpen` from the lazy open, `WriteFailed` from the append or flush.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.ensure_open()?;
        let path = self.full_path();
        let Some(handle) = self.handle.as_mut() else {
            return Err(Error::NotOpen);
        };

        handle
            .write(bytes)
            .and_then(|()| handle.flush())
            .map_err(|e| Error::WriteFailed {
                path,
                source: Arc::new(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn sink(backend: &MemoryBackend) -> Sink {
        Sink::new("/logs", "out.txt", Arc::new(backend.clone()))
    }

    #[test]
    fn lifecycle_states() {
        let backend = MemoryBackend::new();
        let mut sink = sink(&backend);
        assert_eq!(sink.state(), SinkState::Unconfigured);

        sink.set_filename("out.txt").unwrap();
        assert_eq!(sink.state(), SinkState::Configured);

        sink.ensure_open().unwrap();
        assert_eq!(sink.state(), SinkState::Open);
        sink.ensure_open().unwrap();

        sink.close().unwrap();
        assert_eq!(sink.state(), SinkState::Closed);
        assert!(matches!(sink.close(), Err(Error::NotOpen)));
    }

    #[test]
    fn mutation_rejected_while_open() {
        let backend = MemoryBackend::new();
        let mut sink = sink(&backend);
        sink.ensure_open().unwrap();

        assert!(matches!(sink.set_filename("other.txt"), Err(Error::AlreadyOpen)));
        assert!(matches!(sink.set_path("/elsewhere"), Err(Error::AlreadyOpen)));
        assert_eq!(sink.filename(), "out.txt");
        assert_eq!(sink.path(), Path::new("/logs"));
    }

    #[test]
    fn empty_filename_rejected() {
        let backend = MemoryBackend::new();
        let mut sink = sink(&backend);
        assert!(matches!(sink.set_filename(""), Err(Error::InvalidName)));
        assert_eq!(sink.state(), SinkState::Unconfigured);
    }

    #[test]
    fn failed_probe_keeps_old_filename() {
        let backend = MemoryBackend::new();
        backend.deny_open("/logs/bad.txt");
        let mut sink = sink(&backend);
        let err = sink.set_filename("bad.txt").unwrap_err();
        assert!(matches!(err, Error::FileCreationFailed { .. }));
        assert_eq!(sink.filename(), "out.txt");
    }

    #[test]
    fn failed_directory_keeps_old_path() {
        let backend = MemoryBackend::new();
        backend.deny_directory("/ro");
        let mut sink = sink(&backend);
        let err = sink.set_path("/ro").unwrap_err();
        assert!(matches!(err, Error::DirectoryCreationFailed { .. }));
        assert_eq!(sink.path(), Path::new("/logs"));
    }

    #[test]
    fn write_opens_lazily() {
        let backend = MemoryBackend::new();
        let mut sink = sink(&backend);
        sink.write(b"one\n").unwrap();
        sink.write(b"two\n").unwrap();
        assert!(sink.is_open());
        assert_eq!(backend.contents("/logs/out.txt"), "one\ntwo\n");
        assert_eq!(backend.write_count("/logs/out.txt"), 2);
    }

    #[test]
    fn open_failure_is_cannot_open() {
        let backend = MemoryBackend::new();
        backend.deny_open("/logs/out.txt");
        let mut sink = sink(&backend);
        assert!(matches!(sink.write(b"x"), Err(Error::CannotOpen { .. })));
        assert!(!sink.is_open());
    }
}
