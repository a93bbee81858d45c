//! Unified error type for all twinlog operations.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Error type for twinlog operations.
///
/// `Clone` because a flushed [`Line`](crate::Line) hands back the same outcome on
/// every later flush call; I/O sources are shared through `Arc` for that reason.
#[derive(Debug, Clone)]
pub enum Error {
    /// The sink's handle is open, so its path or filename can't change.
    AlreadyOpen,
    /// Close was requested on a sink that isn't open.
    NotOpen,
    /// Filenames must be non-empty.
    InvalidName,
    /// The sink directory could not be created.
    DirectoryCreationFailed {
        path: PathBuf,
        source: Arc<io::Error>,
    },
    /// The speculative append-open probe for a new filename failed.
    FileCreationFailed {
        path: PathBuf,
        source: Arc<io::Error>,
    },
    /// The OS refused to open the sink file for appending.
    CannotOpen {
        path: PathBuf,
        source: Arc<io::Error>,
    },
    /// Appending or flushing an open sink failed.
    WriteFailed {
        path: PathBuf,
        source: Arc<io::Error>,
    },
    /// One or more of the four startup configuration steps failed.
    InitializationFailed(Vec<Error>),
    /// TOML config parsing error.
    ConfigParse(Arc<toml::de::Error>),
    /// Config directory not found.
    ConfigDirNotFound,
    /// I/O error outside of sink handling (e.g. reading a config file).
    Io(Arc<io::Error>),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyOpen => write!(f, "sink is already open"),
            Self::NotOpen => write!(f, "sink is not open"),
            Self::InvalidName => write!(f, "invalid filename: must not be empty"),
            Self::DirectoryCreationFailed { path, source } => {
                write!(f, "failed to create directory {}: {source}", path.display())
            }
            Self::FileCreationFailed { path, source } => {
                write!(f, "failed to create file {}: {source}", path.display())
            }
            Self::CannotOpen { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::WriteFailed { path, source } => {
                write!(f, "write to {} failed: {source}", path.display())
            }
            Self::InitializationFailed(errors) => {
                write!(f, "initialization failed")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{e}")?;
                }
                Ok(())
            }
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryCreationFailed { source, .. }
            | Self::FileCreationFailed { source, .. }
            | Self::CannotOpen { source, .. }
            | Self::WriteFailed { source, .. }
            | Self::Io(source) => Some(source.as_ref()),
            Self::InitializationFailed(errors) => errors
                .first()
                .map(|e| e as &(dyn std::error::Error + 'static)),
            Self::ConfigParse(e) => Some(e.as_ref()),
            Self::AlreadyOpen | Self::NotOpen | Self::InvalidName | Self::ConfigDirNotFound => {
                None
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(Arc::new(e))
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(Arc::new(e))
    }
}
