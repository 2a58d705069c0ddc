//! Closed integer interval the secret is drawn from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive `[low, high]` interval with `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRange {
    low: i64,
    high: i64,
}

impl GuessRange {
    /// The range both shipped variants play on.
    pub const STANDARD: GuessRange = GuessRange { low: 1, high: 100 };

    /// Returns `None` when `low > high`.
    pub const fn new(low: i64, high: i64) -> Option<Self> {
        if low > high {
            None
        } else {
            Some(Self { low, high })
        }
    }

    pub const fn low(&self) -> i64 {
        self.low
    }

    pub const fn high(&self) -> i64 {
        self.high
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.low, self.high)
    }
}

impl Default for GuessRange {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for GuessRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_one_to_hundred() {
        assert_eq!(GuessRange::STANDARD.low(), 1);
        assert_eq!(GuessRange::STANDARD.high(), 100);
        assert_eq!(GuessRange::default(), GuessRange::STANDARD);
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        assert!(GuessRange::new(10, 1).is_none());
        assert!(GuessRange::new(5, 5).is_some());
    }

    #[test]
    fn contains_is_inclusive() {
        let r = GuessRange::STANDARD;
        assert!(r.contains(1));
        assert!(r.contains(100));
        assert!(!r.contains(0));
        assert!(!r.contains(101));
        assert!(!r.contains(-5));
    }

    #[test]
    fn clamp_pulls_into_bounds() {
        let r = GuessRange::STANDARD;
        assert_eq!(r.clamp(-3), 1);
        assert_eq!(r.clamp(250), 100);
        assert_eq!(r.clamp(42), 42);
    }

    #[test]
    fn display_shows_bounds() {
        assert_eq!(GuessRange::STANDARD.to_string(), "[1, 100]");
    }
}
