//! Configuration struct definitions.

use crate::logger::DEFAULT_PATH;
use serde::Deserialize;
use std::path::PathBuf;

/// Location of one sink. Both fields are optional so `[info]` and `[error]`
/// can each fall back to their own default filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Directory; `~` is expanded.
    pub path: Option<String>,
    /// File name inside `path`.
    pub filename: Option<String>,
}

impl SinkConfig {
    /// Config values use `~` for portability; the OS needs the expanded path.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        let raw = self.path.as_deref().unwrap_or(DEFAULT_PATH);
        PathBuf::from(shellexpand::tilde(raw).as_ref())
    }

    #[must_use]
    pub fn filename_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.filename.as_deref().unwrap_or(default)
    }
}
