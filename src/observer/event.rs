//! What the observer reports around each call.

use crate::level::Level;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Exit,
    Exception,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Exit => "exit",
            Self::Exception => "exception",
        }
    }

    /// Exceptions belong in the error stream; enter and exit are routine.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Enter | Self::Exit => Level::Info,
            Self::Exception => Level::Error,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered as `<phase> <name>[ (<message>)] duration_us=<n>[ failure: <text>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event<'a> {
    pub phase: Phase,
    pub name: &'a str,
    pub message: Option<&'a str>,
    pub duration: Duration,
    pub failure: Option<String>,
}

impl<'a> Event<'a> {
    #[must_use]
    pub const fn enter(name: &'a str, message: Option<&'a str>) -> Self {
        Self {
            phase: Phase::Enter,
            name,
            message,
            duration: Duration::ZERO,
            failure: None,
        }
    }

    #[must_use]
    pub const fn exit(name: &'a str, message: Option<&'a str>, duration: Duration) -> Self {
        Self {
            phase: Phase::Exit,
            name,
            message,
            duration,
            failure: None,
        }
    }

    #[must_use]
    pub const fn exception(
        name: &'a str,
        message: Option<&'a str>,
        duration: Duration,
        failure: String,
    ) -> Self {
        Self {
            phase: Phase::Exception,
            name,
            message,
            duration,
            failure: Some(failure),
        }
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.phase, self.name)?;
        if let Some(message) = self.message {
            write!(f, " ({message})")?;
        }
        write!(f, " duration_us={}", self.duration.as_micros())?;
        if let Some(failure) = &self.failure {
            write!(f, " failure: {failure}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_enter() {
        assert_eq!(Event::enter("load", None).to_string(), "enter load duration_us=0");
    }

    #[test]
    fn renders_exception_with_message() {
        let event = Event::exception(
            "load",
            Some("from disk"),
            Duration::from_millis(3),
            "boom".to_string(),
        );
        assert_eq!(
            event.to_string(),
            "exception load (from disk) duration_us=3000 failure: boom"
        );
        assert_eq!(event.phase.level(), Level::Error);
    }
}
