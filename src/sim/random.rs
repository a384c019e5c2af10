//! Injectable randomness for serve tilt and paddle-hit jitter
//!
//! Gameplay only ever asks for a uniform draw in `[0, 1)`, so any `rand::Rng`
//! works and tests can pin the value with [`FixedRandom`].

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    fn unit(&mut self) -> f32;
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Always returns the same draw. Useful for asserting exact trajectories.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f32);

impl RandomSource for FixedRandom {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.0
    }
}

/// Default game RNG
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
