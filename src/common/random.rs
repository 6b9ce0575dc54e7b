use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::time::{SystemTime, UNIX_EPOCH};

/// A deterministic pseudo-random source.
///
/// Two sources built from the same seed yield the same sequence.
/// [`RandomSource::from_time`] seeds from the system clock,
/// which is what training uses when no seed is given.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Construct a source from a fixed seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Construct a source seeded by the current time.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seed_from_u64(seed)
    }

    /// Re-seed `self` in place.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Returns a real number drawn uniformly from `[0, 1)`.
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns an index drawn uniformly from `[0, n)`.
    /// `n` must be positive.
    #[inline]
    pub fn next_index(&mut self, n: usize) -> usize {
        let ix = (n as f64 * self.next_uniform()).floor() as usize;
        ix.min(n - 1)
    }
}
