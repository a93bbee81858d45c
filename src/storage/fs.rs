//! Default backend over `std::fs`.

use super::{SinkHandle, StorageBackend};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Real files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsBackend;

impl StorageBackend for FsBackend {
    fn create_directories(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn open_append(&self, path: &Path) -> io::Result<Box<dyn SinkHandle>> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Box::new(FileHandle(file)))
    }
}

struct FileHandle(File);

impl SinkHandle for FileHandle {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.0.write_all(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }

    fn close(mut self: Box<Self>) -> io::Result<()> {
        self.0.flush()
    }
}
