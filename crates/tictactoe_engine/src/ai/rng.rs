//! Seedable random source for Easy play and the Medium fallback.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable random source for the computer opponents.
///
/// The seed is kept so a game can be reproduced from a log line.
#[derive(Debug, Clone)]
pub struct MoveRng {
    rng: StdRng,
    seed: u64,
}

impl MoveRng {
    /// Deterministic generator for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generator seeded from the thread-local entropy source.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// The seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.index(items.len());
        Some(items[idx])
    }
}

impl Default for MoveRng {
    fn default() -> Self {
        Self::from_random()
    }
}
