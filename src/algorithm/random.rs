//! Sources of uniformly distributed indices for the shuffle algorithms

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Supplies uniformly distributed indices in a closed range
///
/// Threaded explicitly through the shuffles so tests can substitute a
/// deterministic source for the seeded generator.
pub trait RandomSource {
    /// Uniform integer in `0..=upper`, including `upper` itself
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}

/// Seeded random source for reproducible experiments
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..=upper)
    }
}
