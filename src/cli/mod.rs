//! CLI module for twinlog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;

use crate::config::Config;
use crate::mode::Mode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// twinlog - Append records to the info or error log from the command line.
#[derive(Parser)]
#[command(
    name = "twinlog",
    version,
    about = "Append records to the info or error log from the command line"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Append a record to the info log.
    Info(RecordArgs),
    /// Append a record to the error log.
    Error(RecordArgs),
    /// Print where both logs are written.
    Paths,
}

/// Content and per-record formatting flags.
#[derive(Args)]
pub struct RecordArgs {
    /// Record content (words are joined with spaces)
    pub message: Vec<String>,
    /// Suppress the trailing newline
    #[arg(long)]
    pub no_newline: bool,
    /// Force a trailing newline
    #[arg(long)]
    pub newline: bool,
    /// Prefix the current date
    #[arg(long)]
    pub date: bool,
    /// Prefix the current time
    #[arg(long)]
    pub time: bool,
    /// Prefix the hashed thread id
    #[arg(long)]
    pub thread_id: bool,
}

impl RecordArgs {
    /// Folds the flags into one override; no flags means `Mode::NONE`.
    #[must_use]
    pub fn mode(&self) -> Mode {
        [
            (self.no_newline, Mode::NO_NEWLINE),
            (self.newline, Mode::NEWLINE),
            (self.date, Mode::DATE),
            (self.time, Mode::TIME),
            (self.thread_id, Mode::THREAD_ID),
        ]
        .into_iter()
        .filter(|(set, _)| *set)
        .fold(Mode::NONE, |mode, (_, flag)| mode | flag)
    }
}

impl Cli {
    /// Explicit `--config` wins over the default location.
    ///
    /// # Errors
    /// Config read or parse failures.
    pub fn load_config(&self) -> Result<Config, crate::Error> {
        self.config
            .as_deref()
            .map_or_else(Config::load, Config::load_from)
    }
}

pub use commands::{cmd_paths, cmd_record};
