//! Scripts tailing the logs need to know where they are without parsing the config themselves.

use crate::level::Level;
use crate::logger::Logger;
use std::process::ExitCode;

#[must_use]
pub fn cmd_paths(logger: &Logger) -> ExitCode {
    for level in Level::all() {
        println!("{level}: {}", logger.sink_file(level).display());
    }
    ExitCode::SUCCESS
}
