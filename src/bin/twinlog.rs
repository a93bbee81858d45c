//! Shell scripts want the same two log files the application writes to.
//!
//! Usage:
//!   twinlog info <words..> [--date] [--time] [--thread-id] [--newline|--no-newline]
//!   twinlog error <words..> [same flags]
//!   twinlog paths
//!   twinlog --config <path> ...

use clap::Parser;
use std::process::ExitCode;
use twinlog::Level;
use twinlog::Logger;
use twinlog::cli::{Cli, Command, cmd_paths, cmd_record};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Sink locations come from config, so it must load before the logger exists
    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    let logger = Logger::from_config(&config);

    match &cli.command {
        Command::Info(args) => cmd_record(Level::Info, args, &logger),
        Command::Error(args) => cmd_record(Level::Error, args, &logger),
        Command::Paths => cmd_paths(&logger),
    }
}
