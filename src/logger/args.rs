//! Argument lists for the one-shot log calls.
//!
//! The formatting override is never part of the list: it is a separate parameter of
//! [`Logger::log_with`](super::Logger::log_with), so no run-time inspection of the last
//! argument is needed. The [`log_info!`](crate::log_info) and
//! [`log_error!`](crate::log_error) macros put it after a `;`.

use crate::line::{Line, Loggable, Shown};
use std::borrow::Cow;
use std::thread::ThreadId;

/// Content for one record: a single value, `()`, or a tuple of up to twelve values.
pub trait LogArgs {
    fn append_all(&self, line: &mut Line<'_>);
}

impl LogArgs for () {
    fn append_all(&self, _line: &mut Line<'_>) {}
}

macro_rules! log_args_single {
    ($($t:ty),* $(,)?) => {
        $(
            impl LogArgs for $t {
                fn append_all(&self, line: &mut Line<'_>) {
                    line.push(self);
                }
            }
        )*
    };
}

log_args_single!(
    &str, String, &String, Cow<'_, str>, char, bool, ThreadId,
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T: std::fmt::Display> LogArgs for Shown<T> {
    fn append_all(&self, line: &mut Line<'_>) {
        line.push(self);
    }
}

macro_rules! log_args_tuple {
    ($($name:ident),+) => {
        impl<$($name: Loggable),+> LogArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn append_all(&self, line: &mut Line<'_>) {
                let ($($name,)+) = self;
                $( line.push($name); )+
            }
        }
    };
}

log_args_tuple!(A);
log_args_tuple!(A, B);
log_args_tuple!(A, B, C);
log_args_tuple!(A, B, C, D);
log_args_tuple!(A, B, C, D, E);
log_args_tuple!(A, B, C, D, E, F);
log_args_tuple!(A, B, C, D, E, F, G);
log_args_tuple!(A, B, C, D, E, F, G, H);
log_args_tuple!(A, B, C, D, E, F, G, H, I);
log_args_tuple!(A, B, C, D, E, F, G, H, I, J);
log_args_tuple!(A, B, C, D, E, F, G, H, I, J, K);
log_args_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Logs to the info sink. A trailing `; mode` sets the formatting override;
/// `log_info!(logger; mode)` logs no content at all.
///
/// ```
/// use twinlog::{Logger, MemoryBackend, Mode, log_info};
///
/// let backend = MemoryBackend::new();
/// let logger = Logger::builder().backend(backend.clone()).dir("/l").build();
///
/// log_info!(logger, "x", "y").unwrap();
/// log_info!(logger, "x", "y"; Mode::NO_NEWLINE).unwrap();
/// log_info!(logger; Mode::NEWLINE).unwrap();
///
/// assert_eq!(backend.contents("/l/twinlog.log"), "xy\nxy\n");
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr; $mode:expr) => {
        $logger.log_with((), $mode)
    };
    ($logger:expr, $($arg:expr),+ ; $mode:expr) => {
        $logger.log_with(($($arg,)+), $mode)
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.log(($($arg,)+))
    };
}

/// Logs to the error sink; same shapes as [`log_info!`](crate::log_info).
#[macro_export]
macro_rules! log_error {
    ($logger:expr; $mode:expr) => {
        $logger.log_error_with((), $mode)
    };
    ($logger:expr, $($arg:expr),+ ; $mode:expr) => {
        $logger.log_error_with(($($arg,)+), $mode)
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.log_error(($($arg,)+))
    };
}
