//! The injectable random source.
//!
//! Every stochastic decision in the engine — generation draws, damage
//! rolls, flee checks — goes through [`RandomSource`] rather than a
//! global generator, so any component can be driven by a seeded or
//! scripted source under test.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A supplier of uniformly distributed integers.
pub trait RandomSource {
    /// Draw a uniform value from the closed-open interval `[low, high)`.
    ///
    /// Callers wanting an inclusive draw of `low..=max` must pass
    /// `max + 1` as `high`.
    fn range(&mut self, low: i32, high: i32) -> i32;

    /// A 50% draw. True on 1, false on 0.
    fn coin_flip(&mut self) -> bool {
        self.range(0, 2) == 1
    }
}

/// A [`RandomSource`] backed by [`StdRng`].
#[derive(Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Build a reproducible source from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Build a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl RandomSource for SeededRandom {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        assert!(low < high, "empty range [{low}, {high})");
        self.0.random_range(low..high)
    }
}

/// A [`RandomSource`] that replays a fixed sequence of values.
///
/// The test double for everything stochastic: generation, damage rolls,
/// and flee checks all become deterministic under a script. Panics if
/// the script runs out or a scripted value falls outside the requested
/// interval, so a test that draws more (or different) values than it
/// scripted fails immediately.
#[derive(Debug)]
pub struct ScriptedRandom(VecDeque<i32>);

impl ScriptedRandom {
    /// Build a source that replays `values` in order.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self(values.into_iter().collect())
    }

    /// How many scripted values remain unconsumed.
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        let value = self
            .0
            .pop_front()
            .unwrap_or_else(|| panic!("scripted random source exhausted for [{low}, {high})"));
        assert!(
            (low..high).contains(&value),
            "scripted value {value} outside [{low}, {high})"
        );
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.range(0, 1000), b.range(0, 1000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRandom::from_seed(1);
        let mut b = SeededRandom::from_seed(2);
        let draws_a: Vec<i32> = (0..20).map(|_| a.range(0, 1000)).collect();
        let draws_b: Vec<i32> = (0..20).map(|_| b.range(0, 1000)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn coin_flip_hits_both_sides() {
        let mut rng = SeededRandom::from_seed(7);
        let flips: Vec<bool> = (0..200).map(|_| rng.coin_flip()).collect();
        assert!(flips.iter().any(|&f| f));
        assert!(flips.iter().any(|&f| !f));
    }

    #[test]
    fn scripted_replays_in_order() {
        let mut rng = ScriptedRandom::new([3, 1, 0]);
        assert_eq!(rng.range(0, 10), 3);
        assert!(rng.coin_flip());
        assert!(!rng.coin_flip());
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn scripted_panics_when_exhausted() {
        let mut rng = ScriptedRandom::new([1]);
        rng.range(0, 10);
        rng.range(0, 10);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn scripted_panics_on_out_of_range_value() {
        let mut rng = ScriptedRandom::new([10]);
        rng.range(0, 10);
    }

    proptest! {
        #[test]
        fn seeded_draws_stay_in_interval(seed in any::<u64>()) {
            let mut rng = SeededRandom::from_seed(seed);
            for _ in 0..50 {
                let v = rng.range(5, 11);
                prop_assert!((5..11).contains(&v));
            }
        }
    }
}
