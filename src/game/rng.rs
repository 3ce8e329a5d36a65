use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of the uniform draws consumed when a piece is created.
///
/// Implemented for the `rand` generators; tests supply scripted sequences.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn next_in_range(&mut self, low: usize, high: usize) -> usize;
}

impl RandomSource for StdRng {
    fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..=high)
    }
}

impl RandomSource for ThreadRng {
    fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..=high)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        (**self).next_in_range(low, high)
    }
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}
