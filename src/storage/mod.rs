//! Sinks never touch the filesystem directly; everything goes through a [`StorageBackend`].

mod fs;
mod memory;

pub use fs::FsBackend;
pub use memory::MemoryBackend;

use std::io;
use std::path::Path;

/// The only storage operations a sink needs.
///
/// `Send + Sync` because one backend is shared by both sinks of a logger that is itself shared across threads.
///
/// Calls arrive while the owning [`Logger`](crate::Logger) holds its state borrowed, so an
/// implementation must not log through that same logger.
pub trait StorageBackend: Send + Sync {
    /// Creates `path` and all missing parents; succeeds if it already exists.
    ///
    /// # Errors
    /// Any error from the underlying storage.
    fn create_directories(&self, path: &Path) -> io::Result<()>;

    /// Opens (creating if needed) the file at `path` for appending.
    ///
    /// # Errors
    /// Any error from the underlying storage.
    fn open_append(&self, path: &Path) -> io::Result<Box<dyn SinkHandle>>;
}

/// An open append-only destination.
pub trait SinkHandle: Send {
    /// Appends all of `bytes`.
    ///
    /// # Errors
    /// Any error from the underlying storage.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Pushes buffered bytes to the OS.
    ///
    /// # Errors
    /// Any error from the underlying storage.
    fn flush(&mut self) -> io::Result<()>;

    /// Releases the handle.
    ///
    /// # Errors
    /// A final flush failure.
    fn close(self: Box<Self>) -> io::Result<()>;
}
