//! Deterministic per-day RNG.
//!
//! # Determinism strategy
//!
//! One `SmallRng` drives every random decision of a simulated day: visitor
//! shuffles, role picks, candidate-point draws and acceptance rolls.  It is
//! seeded by:
//!
//!   seed = config_seed XOR (date.ordinal() * MIXING_CONSTANT)
//!
//! so the same seed, date and input ordering always reproduce the same
//! placements, while consecutive days still get well-spread streams.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::GameDate;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// The single random source of a scheduling day.
///
/// Not `Clone`: duplicating the stream would silently break reproducibility.
pub struct SessionRng(SmallRng);

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        SessionRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from the configured seed and a date.
    pub fn for_day(seed: u64, date: GameDate) -> Self {
        Self::new(seed ^ date.ordinal().wrapping_mul(MIXING_CONSTANT))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element, or `None` for an empty slice.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
