//! Per-call formatting overrides. `Mode::NONE` defers every decision to [`Settings`](crate::Settings).

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Bit set over the formatting flags a single record can force.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mode(u8);

impl Mode {
    /// No override at all.
    pub const NONE: Self = Self(0);
    /// Force a trailing newline even if the default is off.
    pub const NEWLINE: Self = Self(1 << 0);
    /// Suppress the trailing newline; beats both `NEWLINE` and the default.
    pub const NO_NEWLINE: Self = Self(1 << 1);
    /// Prefix the record with the hashed thread id.
    pub const THREAD_ID: Self = Self(1 << 2);
    /// Prefix the record with the current date.
    pub const DATE: Self = Self(1 << 3);
    /// Prefix the record with the current time of day.
    pub const TIME: Self = Self(1 << 4);

    const NAMED: [(Self, &'static str); 5] = [
        (Self::NEWLINE, "NEWLINE"),
        (Self::NO_NEWLINE, "NO_NEWLINE"),
        (Self::THREAD_ID, "THREAD_ID"),
        (Self::DATE, "DATE"),
        (Self::TIME, "TIME"),
    ];

    const ALL_BITS: u8 = 0b1_1111;

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unknown bits are dropped.
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// True when every flag in `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
}

impl BitOr for Mode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Mode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Mode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for Mode {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("Mode(NONE)");
        }
        f.write_str("Mode(")?;
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_and_intersection() {
        let m = Mode::DATE | Mode::TIME;
        assert!(m.contains(Mode::DATE));
        assert!(m.contains(Mode::TIME));
        assert!(!m.contains(Mode::THREAD_ID));
        assert_eq!(m & Mode::DATE, Mode::DATE);
        assert!((m & Mode::NEWLINE).is_none());
    }

    #[test]
    fn none_is_contained_by_nothing() {
        assert!(!Mode::DATE.contains(Mode::NONE));
        assert!(Mode::default().is_none());
    }

    #[test]
    fn truncate_drops_unknown_bits() {
        assert_eq!(Mode::from_bits_truncate(0xff).bits(), 0b1_1111);
    }

    #[test]
    fn debug_lists_flags() {
        assert_eq!(format!("{:?}", Mode::DATE | Mode::TIME), "Mode(DATE | TIME)");
        assert_eq!(format!("{:?}", Mode::NONE), "Mode(NONE)");
    }
}
