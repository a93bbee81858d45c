//! twinlog's own diagnostics (sink opens, failed probes, init results), written through
//! a separate [`Logger`] the embedding application installs.
//!
//! Uses `OnceLock` so the diagnostic logger is installed exactly once, even if several
//! entry points race to call [`init`].

use crate::level::Level;
use crate::logger::Logger;
use std::cell::Cell;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();
static VERBOSE: AtomicBool = AtomicBool::new(false);

thread_local! {
    static EMITTING: Cell<bool> = const { Cell::new(false) };
}

/// Installs `logger` as the diagnostic sink. Only the first call takes effect;
/// returns `false` if a logger was already installed.
pub fn init(logger: Logger) -> bool {
    let installed = INTERNAL_LOGGER.set(logger).is_ok();
    if installed {
        debug("INTERNAL", "Internal logger ready");
    }
    installed
}

#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

/// `debug` output is off unless enabled here.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Resets the re-entrancy flag even if the diagnostic write panics.
struct Emitting;

impl Drop for Emitting {
    fn drop(&mut self) {
        EMITTING.with(|flag| flag.set(false));
    }
}

/// Pre-init calls silently vanish. Diagnostics raised while a diagnostic is being
/// written (the diagnostic logger's own sink activity) are dropped, so this never recurses.
fn log(level: Level, scope: &str, msg: &str) {
    let Some(logger) = INTERNAL_LOGGER.get() else {
        return;
    };
    if EMITTING.with(|flag| flag.replace(true)) {
        return;
    }
    let _reset = Emitting;
    let _ = match level {
        Level::Info => logger.log(("[", scope, "] ", msg)),
        Level::Error => logger.log_error(("[", scope, "] ", msg)),
    };
}

/// Lifecycle details: sinks configured, opened, closed.
pub fn debug(scope: &str, msg: &str) {
    if VERBOSE.load(Ordering::Relaxed) {
        log(Level::Info, scope, msg);
    }
}

/// Normal milestones such as a loaded config.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Non-fatal anomalies.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}

/// Failures that are also returned to the caller as an `Error`.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
