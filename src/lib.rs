//! `twinlog` - thread-safe logging to two append-only files: an info stream and an error stream.
//!
//! - Records built incrementally with [`Line`], flushed exactly once (explicitly or on drop)
//! - One-shot calls ([`Logger::log`], [`Logger::log_with`], [`log_info!`], [`log_error!`])
//! - Per-call formatting overrides ([`Mode`]) resolved against process-wide [`Settings`]
//! - Call instrumentation ([`Observer`]) logging enter/exit/exception with durations
//! - Pluggable storage ([`StorageBackend`]) with a filesystem and an in-memory implementation
//!
//! # Example
//!
//! ```
//! use twinlog::{Logger, Mode, log_info};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let logger = Logger::builder().dir(dir.path()).build();
//!
//! logger.info().append("started, pid=").append(std::process::id());
//! logger.error().append("disk almost full: ").append(97.5).append('%');
//! log_info!(logger, "cache ", "warm"; Mode::TIME).unwrap();
//!
//! let answer = logger.observe("compute", || 6 * 7).call();
//! assert_eq!(answer, 42);
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `twinlog` command-line binary

pub mod config;
pub mod error;
pub mod internal;
pub mod level;
pub mod line;
pub mod logger;
pub mod mode;
pub mod observer;
pub mod settings;
pub mod sink;
pub mod storage;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::{Config, SinkConfig};
pub use error::Error;
pub use level::Level;
pub use line::{CONVERSION_FAILED, Line, Loggable, Shown, thread_hash};
pub use logger::{LogArgs, Logger, LoggerBuilder, global};
pub use mode::Mode;
pub use observer::{Event, Observer, Phase};
pub use settings::{Field, Settings};
pub use sink::{Sink, SinkState};
pub use storage::{FsBackend, MemoryBackend, SinkHandle, StorageBackend};
