//! Process-wide formatting defaults and their resolution against a per-call [`Mode`].

use crate::mode::Mode;
use serde::Deserialize;

/// Defaults applied to every record whose [`Mode`] doesn't force a decision.
///
/// An empty `[format]` config section must still yield usable defaults, hence `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Terminate each record with `\n`.
    pub auto_newline: bool,
    /// Prefix each record with `TID: <hash>`.
    pub auto_thread_id: bool,
    /// Prefix each record with the local date.
    pub auto_date: bool,
    /// Prefix each record with the local time of day.
    pub auto_time: bool,
    /// strftime pattern for the date prefix.
    pub date_format: String,
    /// strftime pattern for the time prefix.
    pub time_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_newline: true,
            auto_thread_id: false,
            auto_date: false,
            auto_time: false,
            date_format: "%Y-%m-%d".to_string(),
            time_format: "%H:%M:%S".to_string(),
        }
    }
}

/// The formatting decisions a record makes at flush time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Newline,
    ThreadId,
    Date,
    Time,
}

impl Settings {
    /// Whether `field` applies to a record flushed with `mode`.
    ///
    /// `NO_NEWLINE` wins over `NEWLINE` and over `auto_newline`; a caller can always
    /// suppress the trailing newline for one record.
    #[must_use]
    pub const fn resolve(&self, mode: Mode, field: Field) -> bool {
        match field {
            Field::Newline => {
                if mode.contains(Mode::NO_NEWLINE) {
                    false
                } else if mode.contains(Mode::NEWLINE) {
                    true
                } else {
                    self.auto_newline
                }
            }
            Field::ThreadId => mode.contains(Mode::THREAD_ID) || self.auto_thread_id,
            Field::Date => mode.contains(Mode::DATE) || self.auto_date,
            Field::Time => mode.contains(Mode::TIME) || self.auto_time,
        }
    }
}
