use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random integers for the game core.
///
/// Kept behind a trait so the core stays deterministic under a fixed seed
/// and tests can script the exact draws.
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. `n` must be positive.
    fn next_in_range(&mut self, n: u32) -> u32;
}

/// Seeded random source used for real play. Remembers its seed so a
/// session can be reproduced.
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Fresh source with a seed drawn from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this source was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, n: u32) -> u32 {
        self.rng.gen_range(0..n)
    }
}
