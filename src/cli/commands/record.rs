//! The most common CLI operation: shell scripts append one record and exit.

use crate::cli::RecordArgs;
use crate::level::Level;
use crate::logger::Logger;
use std::process::ExitCode;

/// Joins the words into one record and flushes it to the sink for `level`.
#[must_use]
pub fn cmd_record(level: Level, args: &RecordArgs, logger: &Logger) -> ExitCode {
    let message = args.message.join(" ");
    match logger.dispatch(level, message, args.mode()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("twinlog: {e}");
            ExitCode::FAILURE
        }
    }
}
