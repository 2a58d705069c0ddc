//! Where secrets come from.
//!
//! Real games draw from the thread RNG. Seeded and fixed sources exist so a
//! game can be replayed or driven from tests with a known answer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::range::GuessRange;

/// Supplies the secret for a new session.
pub trait SecretSource {
    /// Pick a value inside `range` (inclusive on both ends).
    fn pick(&mut self, range: GuessRange) -> i64;
}

/// Uniform draw from `rand::thread_rng()`. No security requirement.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl SecretSource for ThreadRngSource {
    fn pick(&mut self, range: GuessRange) -> i64 {
        rand::thread_rng().gen_range(range.low()..=range.high())
    }
}

/// Reproducible draws from a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SecretSource for SeededSource {
    fn pick(&mut self, range: GuessRange) -> i64 {
        self.rng.gen_range(range.low()..=range.high())
    }
}

/// Always yields the same value, clamped into the requested range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSecret(pub i64);

impl SecretSource for FixedSecret {
    fn pick(&mut self, range: GuessRange) -> i64 {
        range.clamp(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_stays_in_range() {
        let mut source = ThreadRngSource;
        for _ in 0..1000 {
            let value = source.pick(GuessRange::STANDARD);
            assert!(GuessRange::STANDARD.contains(value), "{value} out of range");
        }
    }

    #[test]
    fn thread_rng_single_value_range() {
        let range = GuessRange::new(7, 7).unwrap();
        assert_eq!(ThreadRngSource.pick(range), 7);
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = SeededSource::new(42);
        let mut b = SeededSource::new(42);
        let first: Vec<i64> = (0..20).map(|_| a.pick(GuessRange::STANDARD)).collect();
        let second: Vec<i64> = (0..20).map(|_| b.pick(GuessRange::STANDARD)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|v| GuessRange::STANDARD.contains(*v)));
    }

    #[test]
    fn fixed_secret_returns_value() {
        assert_eq!(FixedSecret(50).pick(GuessRange::STANDARD), 50);
    }

    #[test]
    fn fixed_secret_clamps() {
        assert_eq!(FixedSecret(0).pick(GuessRange::STANDARD), 1);
        assert_eq!(FixedSecret(1000).pick(GuessRange::STANDARD), 100);
    }
}
