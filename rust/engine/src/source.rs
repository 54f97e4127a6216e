//! Randomness capability used to draw a game's secret number.
//!
//! Games never reach for a global generator: the caller hands a
//! [`NumberSource`] to [`crate::game::Game::new`]. Any `rand` generator
//! qualifies, and [`FixedNumber`] gives tests and replays a known secret.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Draws an integer uniformly from a closed range.
pub trait NumberSource {
    /// Callers guarantee `min <= max`.
    fn pick(&mut self, min: i64, max: i64) -> i64;
}

impl<R: RngCore> NumberSource for R {
    fn pick(&mut self, min: i64, max: i64) -> i64 {
        self.random_range(min..=max)
    }
}

/// Always yields the same number, clamped into the requested range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedNumber(pub i64);

impl NumberSource for FixedNumber {
    fn pick(&mut self, min: i64, max: i64) -> i64 {
        self.0.clamp(min, max)
    }
}

/// Deterministic generator for reproducible games.
pub fn seeded_source(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
