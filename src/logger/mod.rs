//! The logger instance: formatting defaults plus the info and error sinks, all behind
//! one re-entrant lock so lazy initialization can happen from inside a write.

mod args;
mod builder;

pub use args::LogArgs;
pub use builder::LoggerBuilder;

use crate::config::Config;
use crate::error::Error;
use crate::internal;
use crate::level::Level;
use crate::line::{Line, Loggable, Shown, thread_hash};
use crate::mode::Mode;
use crate::observer::Observer;
use crate::settings::{Field, Settings};
use crate::sink::{Sink, SinkState};
use chrono::Local;
use parking_lot::ReentrantMutex;
use std::cell::RefCell;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Directory both sinks default to.
pub const DEFAULT_PATH: &str = ".";
/// Default info sink filename.
pub const DEFAULT_LOG_FILENAME: &str = "twinlog.log";
/// Default error sink filename.
pub const DEFAULT_ERROR_LOG_FILENAME: &str = "twinlog.err.log";

#[derive(Debug)]
struct State {
    settings: Settings,
    info: Sink,
    error: Sink,
    initialized: bool,
}

impl State {
    const fn sink(&self, level: Level) -> &Sink {
        match level {
            Level::Info => &self.info,
            Level::Error => &self.error,
        }
    }

    const fn sink_mut(&mut self, level: Level) -> &mut Sink {
        match level {
            Level::Info => &mut self.info,
            Level::Error => &mut self.error,
        }
    }
}

/// Shared by reference between threads; every access goes through the one lock.
///
/// The lock is re-entrant: a log call may run [`init`](Self::init) on the same thread
/// while already holding it. `RefCell` borrows are never held across such nested calls.
pub struct Logger {
    state: ReentrantMutex<RefCell<State>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.state.lock();
        let state = guard.borrow();
        f.debug_struct("Logger")
            .field("settings", &state.settings)
            .field("info", &state.info)
            .field("error", &state.error)
            .field("initialized", &state.initialized)
            .finish()
    }
}

impl Logger {
    /// Filesystem-backed logger writing `./twinlog.log` and `./twinlog.err.log`.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Sink locations and formatting defaults taken from a loaded config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        LoggerBuilder::new()
            .log_path(config.info.resolved_path())
            .log_filename(config.info.filename_or(DEFAULT_LOG_FILENAME))
            .error_log_path(config.error.resolved_path())
            .error_log_filename(config.error.filename_or(DEFAULT_ERROR_LOG_FILENAME))
            .settings(config.format.clone())
            .build()
    }

    pub(crate) fn from_parts(settings: Settings, info: Sink, error: Sink) -> Self {
        Self {
            state: ReentrantMutex::new(RefCell::new(State {
                settings,
                info,
                error,
                initialized: false,
            })),
        }
    }

    /// Validates both sinks with their current paths and filenames: creates both
    /// directories, then probes both files. Every step runs even if an earlier one
    /// failed, so the error lists all of them.
    ///
    /// # Errors
    /// `InitializationFailed` carrying each failed step's error.
    pub fn init(&self) -> Result<(), Error> {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();
        let mut failures = Vec::new();

        // An open sink was validated when it opened and can't be re-pointed anyway.
        for level in Level::all() {
            let sink = state.sink_mut(level);
            if sink.is_open() {
                continue;
            }
            let dir = sink.path().to_path_buf();
            if let Err(e) = sink.set_path(&dir) {
                failures.push(e);
            }
        }
        for level in Level::all() {
            let sink = state.sink_mut(level);
            if sink.is_open() {
                continue;
            }
            let name = sink.filename().to_string();
            if let Err(e) = sink.set_filename(&name) {
                failures.push(e);
            }
        }

        if failures.is_empty() {
            state.initialized = true;
            internal::debug("LOGGER", "Initialized");
            Ok(())
        } else {
            internal::error(
                "LOGGER",
                &format!("Initialization failed in {} step(s)", failures.len()),
            );
            Err(Error::InitializationFailed(failures))
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.lock().borrow().initialized
    }

    fn ensure_initialized(&self) -> Result<(), Error> {
        let guard = self.state.lock();
        let initialized = guard.borrow().initialized;
        if initialized { Ok(()) } else { self.init() }
    }

    fn with_sink<T>(&self, level: Level, f: impl FnOnce(&mut Sink) -> T) -> T {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();
        f(state.sink_mut(level))
    }

    /// # Errors
    /// `AlreadyOpen` while the info sink is open, `DirectoryCreationFailed` otherwise.
    pub fn set_log_path(&self, dir: impl AsRef<Path>) -> Result<(), Error> {
        self.with_sink(Level::Info, |sink| sink.set_path(dir))
    }

    /// # Errors
    /// `AlreadyOpen` while the error sink is open, `DirectoryCreationFailed` otherwise.
    pub fn set_error_log_path(&self, dir: impl AsRef<Path>) -> Result<(), Error> {
        self.with_sink(Level::Error, |sink| sink.set_path(dir))
    }

    /// # Errors
    /// `AlreadyOpen`, `InvalidName`, or `FileCreationFailed`.
    pub fn set_log_filename(&self, name: &str) -> Result<(), Error> {
        self.with_sink(Level::Info, |sink| sink.set_filename(name))
    }

    /// # Errors
    /// `AlreadyOpen`, `InvalidName`, or `FileCreationFailed`.
    pub fn set_error_log_filename(&self, name: &str) -> Result<(), Error> {
        self.with_sink(Level::Error, |sink| sink.set_filename(name))
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.with_sink(Level::Info, |sink| sink.path().to_path_buf())
    }

    #[must_use]
    pub fn error_log_path(&self) -> PathBuf {
        self.with_sink(Level::Error, |sink| sink.path().to_path_buf())
    }

    #[must_use]
    pub fn log_filename(&self) -> String {
        self.with_sink(Level::Info, |sink| sink.filename().to_string())
    }

    #[must_use]
    pub fn error_log_filename(&self) -> String {
        self.with_sink(Level::Error, |sink| sink.filename().to_string())
    }

    /// `path/filename` of the sink for `level`.
    #[must_use]
    pub fn sink_file(&self, level: Level) -> PathBuf {
        self.state.lock().borrow().sink(level).full_path()
    }

    #[must_use]
    pub fn sink_state(&self, level: Level) -> SinkState {
        self.state.lock().borrow().sink(level).state()
    }

    fn open(&self, level: Level) -> Result<(), Error> {
        let _guard = self.state.lock();
        self.ensure_initialized()?;
        self.with_sink(level, Sink::ensure_open)
    }

    /// Opens the info sink ahead of the first write. A no-op when already open.
    ///
    /// # Errors
    /// `InitializationFailed` from the lazy init, or `CannotOpen`.
    pub fn open_logger(&self) -> Result<(), Error> {
        self.open(Level::Info)
    }

    /// Opens the error sink ahead of the first write. A no-op when already open.
    ///
    /// # Errors
    /// `InitializationFailed` from the lazy init, or `CannotOpen`.
    pub fn open_error_logger(&self) -> Result<(), Error> {
        self.open(Level::Error)
    }

    /// # Errors
    /// `NotOpen` if the info sink isn't open.
    pub fn close_logger(&self) -> Result<(), Error> {
        self.with_sink(Level::Info, Sink::close)
    }

    /// # Errors
    /// `NotOpen` if the error sink isn't open.
    pub fn close_error_logger(&self) -> Result<(), Error> {
        self.with_sink(Level::Error, Sink::close)
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.state.lock().borrow().settings.clone()
    }

    pub fn set_settings(&self, settings: Settings) {
        self.state.lock().borrow_mut().settings = settings;
    }

    /// Edits the defaults under the lock. `f` works on a copy, so it may call back
    /// into this logger on the same thread; the copy is stored when `f` returns.
    pub fn update_settings(&self, f: impl FnOnce(&mut Settings)) {
        let _guard = self.state.lock();
        let mut settings = self.settings();
        f(&mut settings);
        self.set_settings(settings);
    }

    /// Empty record for `level`; it flushes itself when dropped.
    #[must_use]
    pub const fn line(&self, level: Level) -> Line<'_> {
        Line::new(self, level)
    }

    /// Empty record for the info sink.
    #[must_use]
    pub const fn info(&self) -> Line<'_> {
        self.line(Level::Info)
    }

    /// Empty record for the error sink.
    #[must_use]
    pub const fn error(&self) -> Line<'_> {
        self.line(Level::Error)
    }

    /// Builds a record from `args`, formats it with `mode`, and flushes it immediately.
    ///
    /// # Errors
    /// Lazy initialization, open, or write failures for the target sink.
    pub fn dispatch(&self, level: Level, args: impl LogArgs, mode: Mode) -> Result<(), Error> {
        let mut line = self.line(level);
        line.set_mode(mode);
        args.append_all(&mut line);
        line.finish()
    }

    /// Writes `args` to the info sink using the default formatting.
    ///
    /// # Errors
    /// See [`dispatch`](Self::dispatch).
    pub fn log(&self, args: impl LogArgs) -> Result<(), Error> {
        self.dispatch(Level::Info, args, Mode::NONE)
    }

    /// Writes `args` to the info sink, formatted with `mode`.
    ///
    /// `()` is valid content: the record is just the configured prefixes and newline.
    ///
    /// # Errors
    /// See [`dispatch`](Self::dispatch).
    pub fn log_with(&self, args: impl LogArgs, mode: Mode) -> Result<(), Error> {
        self.dispatch(Level::Info, args, mode)
    }

    /// Writes `args` to the error sink using the default formatting.
    ///
    /// # Errors
    /// See [`dispatch`](Self::dispatch).
    pub fn log_error(&self, args: impl LogArgs) -> Result<(), Error> {
        self.dispatch(Level::Error, args, Mode::NONE)
    }

    /// Writes `args` to the error sink, formatted with `mode`.
    ///
    /// # Errors
    /// See [`dispatch`](Self::dispatch).
    pub fn log_error_with(&self, args: impl LogArgs, mode: Mode) -> Result<(), Error> {
        self.dispatch(Level::Error, args, mode)
    }

    /// Wraps `callable` so each call logs enter, exit or exception, and duration.
    pub fn observe<F>(&self, name: impl Into<String>, callable: F) -> Observer<'_, F> {
        Observer::new(self, name, callable)
    }

    /// Renders and appends one record. Runs `init` first if this logger never has.
    pub(crate) fn write_record(&self, level: Level, mode: Mode, text: &str) -> Result<(), Error> {
        let guard = self.state.lock();
        self.ensure_initialized()?;

        let mut state = guard.borrow_mut();
        let rendered = render(&state.settings, mode, text);
        state.sink_mut(level).write(rendered.as_bytes())
    }
}

/// `[date ][time ][TID: <hash> ]<text>[\n]`
fn render(settings: &Settings, mode: Mode, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 40);
    let want_date = settings.resolve(mode, Field::Date);
    let want_time = settings.resolve(mode, Field::Time);

    if want_date || want_time {
        let now = Local::now();
        if want_date {
            Shown(now.format(&settings.date_format)).append_to(&mut out);
            out.push(' ');
        }
        if want_time {
            Shown(now.format(&settings.time_format)).append_to(&mut out);
            out.push(' ');
        }
    }
    if settings.resolve(mode, Field::ThreadId) {
        let _ = write!(out, "TID: {} ", thread_hash(std::thread::current().id()));
    }

    out.push_str(text);
    if settings.resolve(mode, Field::Newline) {
        out.push('\n');
    }
    out
}

/// Process-wide logger with default locations, built on first use.
#[must_use]
pub fn global() -> &'static Logger {
    static GLOBAL: OnceLock<Logger> = OnceLock::new();
    GLOBAL.get_or_init(Logger::new)
}
