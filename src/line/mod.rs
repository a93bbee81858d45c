//! A record under construction. Content accumulates across appends and reaches the
//! sink exactly once: on the first explicit flush, or when the line is dropped.
//!
//! ```
//! use twinlog::{Logger, Mode, MemoryBackend};
//!
//! let backend = MemoryBackend::new();
//! let logger = Logger::builder().backend(backend.clone()).log_path("/logs").build();
//!
//! logger.info().append("answer=").append(42).append(' ').append(true);
//! logger.info().append("no newline").mode(Mode::NO_NEWLINE);
//!
//! assert_eq!(backend.contents("/logs/twinlog.log"), "answer=42 true\nno newline");
//! ```

mod value;

pub use value::{CONVERSION_FAILED, Loggable, Shown, thread_hash};

use crate::error::Error;
use crate::level::Level;
use crate::logger::Logger;
use crate::mode::Mode;
use std::fmt;

/// Neither `Clone` nor `Copy`: two live copies would both owe the sink a write.
/// Moving a line moves the obligation with it; the moved-from binding is gone.
pub struct Line<'a> {
    logger: &'a Logger,
    level: Level,
    text: String,
    mode: Mode,
    flushed: bool,
    outcome: Option<Result<(), Error>>,
}

impl<'a> Line<'a> {
    /// Starts an empty record bound to `logger`'s sink for `level`.
    #[must_use]
    pub const fn new(logger: &'a Logger, level: Level) -> Self {
        Self {
            logger,
            level,
            text: String::new(),
            mode: Mode::NONE,
            flushed: false,
            outcome: None,
        }
    }

    /// Chained by-value append; the returned line still owes its flush.
    pub fn append(mut self, value: impl Loggable) -> Self {
        value.append_to(&mut self.text);
        self
    }

    /// Replaces the record's formatting override. Last call wins.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// In-place append for lines held in a binding.
    pub fn push(&mut self, value: impl Loggable) -> &mut Self {
        value.append_to(&mut self.text);
        self
    }

    /// In-place variant of [`mode`](Self::mode).
    pub fn set_mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Content appended so far, without prefixes or newline.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn current_mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn is_flushed(&self) -> bool {
        self.flushed
    }

    /// Renders and writes the record. Only the first call touches the sink; every later
    /// call returns the first call's outcome.
    ///
    /// # Errors
    /// Whatever the first write attempt returned: lazy initialization or open failures,
    /// or the write itself.
    pub fn flush_now(&mut self) -> Result<(), Error> {
        if self.flushed {
            return self.outcome.clone().unwrap_or(Ok(()));
        }
        self.flushed = true;

        let outcome = self.logger.write_record(self.level, self.mode, &self.text);
        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Flushes and consumes the line, handing back the write result.
    ///
    /// # Errors
    /// Same as [`flush_now`](Self::flush_now).
    pub fn finish(mut self) -> Result<(), Error> {
        self.flush_now()
    }
}

impl Drop for Line<'_> {
    fn drop(&mut self) {
        if !self.flushed {
            let _ = self.flush_now();
        }
    }
}

impl fmt::Write for Line<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("level", &self.level)
            .field("text", &self.text)
            .field("mode", &self.mode)
            .field("flushed", &self.flushed)
            .finish_non_exhaustive()
    }
}
