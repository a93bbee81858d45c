//! Call-site instrumentation: wraps a callable and logs enter, then exit or exception,
//! with the elapsed time. The wrapped outcome is never altered: values come back
//! unchanged, `Err`s are returned as-is, and panics resume with their original payload.
//!
//! ```
//! use twinlog::{Logger, MemoryBackend};
//!
//! let backend = MemoryBackend::new();
//! let logger = Logger::builder().backend(backend.clone()).dir("/l").build();
//!
//! let square = logger.observe("square", |x: i32| x * x).message("demo");
//! assert_eq!(square.call_with(7), 49);
//!
//! let log = backend.contents("/l/twinlog.log");
//! assert!(log.starts_with("enter square (demo) duration_us=0\nexit square (demo) duration_us="));
//! ```

mod event;

pub use event::{Event, Phase};

use crate::internal;
use crate::line::Shown;
use crate::logger::Logger;
use crate::mode::Mode;
use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

/// Holds only the name, the optional message and the callable, so it can be called
/// repeatedly, and from several threads at once when `F: Sync`.
pub struct Observer<'a, F> {
    logger: &'a Logger,
    name: String,
    message: Option<String>,
    callable: F,
}

impl<'a, F> Observer<'a, F> {
    pub fn new(logger: &'a Logger, name: impl Into<String>, callable: F) -> Self {
        Self {
            logger,
            name: name.into(),
            message: None,
            callable,
        }
    }

    /// Extra context printed after the name in every event.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gives back the wrapped callable.
    pub fn into_inner(self) -> F {
        self.callable
    }

    /// Event delivery problems are the logger's concern; they never change the wrapped outcome.
    fn emit(&self, event: &Event<'_>) {
        if let Err(e) = self
            .logger
            .dispatch(event.phase.level(), Shown(event), Mode::NONE)
        {
            internal::warn(
                "OBSERVER",
                &format!("Dropped {} event for {}: {e}", event.phase, event.name),
            );
        }
    }

    fn observe<R>(
        &self,
        run: impl FnOnce() -> R,
        failure_of: impl FnOnce(&R) -> Option<String>,
    ) -> R {
        let message = self.message.as_deref();
        self.emit(&Event::enter(&self.name, message));

        let start = Instant::now();
        let outcome = panic::catch_unwind(AssertUnwindSafe(run));
        let elapsed = start.elapsed();

        match outcome {
            Ok(value) => {
                let event = match failure_of(&value) {
                    Some(failure) => Event::exception(&self.name, message, elapsed, failure),
                    None => Event::exit(&self.name, message, elapsed),
                };
                self.emit(&event);
                value
            }
            Err(payload) => {
                let failure = panic_text(payload.as_ref());
                self.emit(&Event::exception(&self.name, message, elapsed, failure));
                panic::resume_unwind(payload)
            }
        }
    }

    /// Calls the wrapped closure and returns its value.
    pub fn call<R>(&self) -> R
    where
        F: Fn() -> R,
    {
        self.observe(|| (self.callable)(), |_| None)
    }

    /// Calls the wrapped closure with `args` (use a tuple for several) and returns its value.
    pub fn call_with<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        self.observe(|| (self.callable)(args), |_| None)
    }

    /// Like [`call`](Self::call), but an `Err` return is logged as an exception
    /// with the error's `Display` text before being handed back.
    ///
    /// # Errors
    /// Exactly the error the wrapped closure returned.
    pub fn try_call<T, E>(&self) -> Result<T, E>
    where
        F: Fn() -> Result<T, E>,
        E: Display,
    {
        self.observe(|| (self.callable)(), failure_text)
    }

    /// [`try_call`](Self::try_call) with arguments.
    ///
    /// # Errors
    /// Exactly the error the wrapped closure returned.
    pub fn try_call_with<A, T, E>(&self, args: A) -> Result<T, E>
    where
        F: Fn(A) -> Result<T, E>,
        E: Display,
    {
        self.observe(|| (self.callable)(args), failure_text)
    }
}

fn failure_text<T, E: Display>(result: &Result<T, E>) -> Option<String> {
    result.as_ref().err().map(ToString::to_string)
}

/// `panic!` payloads are a `&'static str` or a `String`; anything else has no text.
fn panic_text(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
