//! TOML configuration: where the two sinks live and the formatting defaults.
//!
//! ```toml
//! [info]
//! path = "~/.local/state/myapp"
//! filename = "myapp.log"
//!
//! [error]
//! path = "~/.local/state/myapp"
//! filename = "myapp.err.log"
//!
//! [format]
//! auto_date = true
//! auto_time = true
//! ```

mod structs;

pub use structs::SinkConfig;

use crate::internal;
use crate::settings::Settings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file must still produce a working logger; `#[serde(default)]` on every
/// section makes zero-config work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Info sink location.
    pub info: SinkConfig,
    /// Error sink location.
    pub error: SinkConfig,
    /// Formatting defaults applied when a record has no override.
    pub format: Settings,
}

impl Config {
    /// Reads the config from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or it isn't valid TOML.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Reads the config from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but can't be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// `ConfigParse` on invalid TOML or mistyped values.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/twinlog/twinlog.toml` (XDG on Linux).
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("twinlog").join("twinlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}
