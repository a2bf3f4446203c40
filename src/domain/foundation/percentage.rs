//! Percentage value object (0-100 scale) used for progress indicators.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number progress value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Truncating ratio of `part` over `whole`; an empty whole is zero.
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let value = (part.min(whole) * 100) / whole;
        Self(value as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(66).value(), 66);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn percentage_of_truncates() {
        assert_eq!(Percentage::of(0, 3), Percentage::ZERO);
        assert_eq!(Percentage::of(1, 3).value(), 33);
        assert_eq!(Percentage::of(2, 3).value(), 66);
        assert_eq!(Percentage::of(3, 3), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_of_empty_whole_is_zero() {
        assert_eq!(Percentage::of(4, 0), Percentage::ZERO);
    }

    #[test]
    fn percentage_displays_with_sign() {
        assert_eq!(Percentage::new(33).to_string(), "33%");
    }

    #[test]
    fn percentage_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Percentage::new(66)).unwrap(), "66");
    }
}
