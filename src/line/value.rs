//! Text conversion for everything a [`Line`](super::Line) accepts.
//!
//! Numbers go through `core::fmt`, which never consults the process locale:
//! `-17` is always `-17` and `3.5` is always `3.5`.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::thread::ThreadId;

/// Substituted when a value's `Display` implementation reports an error.
pub const CONVERSION_FAILED: &str = "<?>";

/// A value that knows how to append itself to a record's text.
pub trait Loggable {
    fn append_to(&self, out: &mut String);
}

impl<T: Loggable + ?Sized> Loggable for &T {
    fn append_to(&self, out: &mut String) {
        (**self).append_to(out);
    }
}

impl Loggable for str {
    fn append_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Loggable for String {
    fn append_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Loggable for Cow<'_, str> {
    fn append_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Loggable for char {
    fn append_to(&self, out: &mut String) {
        out.push(*self);
    }
}

impl Loggable for bool {
    fn append_to(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

macro_rules! loggable_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Loggable for $t {
                fn append_to(&self, out: &mut String) {
                    append_display(out, self);
                }
            }
        )*
    };
}

loggable_number!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Stable within a process: `DefaultHasher::new()` always starts from the same keys.
#[must_use]
pub fn thread_hash(id: ThreadId) -> u64 {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    hasher.finish()
}

impl Loggable for ThreadId {
    fn append_to(&self, out: &mut String) {
        append_display(out, &thread_hash(*self));
    }
}

/// Logs any `Display` value; a failing `Display` impl yields [`CONVERSION_FAILED`].
#[derive(Debug, Clone, Copy)]
pub struct Shown<T>(pub T);

impl<T: fmt::Display> Loggable for Shown<T> {
    fn append_to(&self, out: &mut String) {
        append_display(out, &self.0);
    }
}

fn append_display(out: &mut String, value: &dyn fmt::Display) {
    let start = out.len();
    if write!(out, "{value}").is_err() {
        out.truncate(start);
        out.push_str(CONVERSION_FAILED);
    }
}
