//! Stepwise construction so callers only name the locations they care about.

use super::{DEFAULT_ERROR_LOG_FILENAME, DEFAULT_LOG_FILENAME, DEFAULT_PATH, Logger};
use crate::settings::Settings;
use crate::sink::Sink;
use crate::storage::{FsBackend, StorageBackend};
use std::path::PathBuf;
use std::sync::Arc;

/// Nothing is validated here. Paths and filenames are checked by
/// [`Logger::init`], which runs lazily on the first write.
pub struct LoggerBuilder {
    backend: Arc<dyn StorageBackend>,
    log_path: PathBuf,
    log_filename: String,
    error_log_path: PathBuf,
    error_log_filename: String,
    settings: Settings,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Real files under the current directory with default formatting.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: Arc::new(FsBackend),
            log_path: PathBuf::from(DEFAULT_PATH),
            log_filename: DEFAULT_LOG_FILENAME.to_string(),
            error_log_path: PathBuf::from(DEFAULT_PATH),
            error_log_filename: DEFAULT_ERROR_LOG_FILENAME.to_string(),
            settings: Settings::default(),
        }
    }

    /// Tests and embedders may not want the real filesystem.
    #[must_use]
    pub fn backend(mut self, backend: impl StorageBackend + 'static) -> Self {
        self.backend = Arc::new(backend);
        self
    }

    /// Same as [`backend`](Self::backend) for an already shared backend.
    #[must_use]
    pub fn shared_backend(mut self, backend: Arc<dyn StorageBackend>) -> Self {
        self.backend = backend;
        self
    }

    #[must_use]
    pub fn log_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_path = dir.into();
        self
    }

    #[must_use]
    pub fn log_filename(mut self, name: impl Into<String>) -> Self {
        self.log_filename = name.into();
        self
    }

    #[must_use]
    pub fn error_log_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.error_log_path = dir.into();
        self
    }

    #[must_use]
    pub fn error_log_filename(mut self, name: impl Into<String>) -> Self {
        self.error_log_filename = name.into();
        self
    }

    /// Both sinks in one directory.
    #[must_use]
    pub fn dir(self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.log_path(dir.clone()).error_log_path(dir)
    }

    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let info = Sink::new(
            self.log_path,
            self.log_filename,
            Arc::clone(&self.backend),
        );
        let error = Sink::new(self.error_log_path, self.error_log_filename, self.backend);
        Logger::from_parts(self.settings, info, error)
    }
}
