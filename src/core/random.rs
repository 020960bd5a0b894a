//! Random source injected into the remedy generator

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two draws the remedy generator needs
pub trait RandomSource {
    /// Uniform draw in [0, 1)
    fn uniform(&mut self) -> f64;

    /// Uniform index in [0, len); `len` is never zero
    fn index(&mut self, len: usize) -> usize;

    /// Uniform pick from a non-empty pool
    fn choice<'a, T>(&mut self, pool: &'a [T]) -> &'a T {
        &pool[self.index(pool.len())]
    }
}

/// `RandomSource` backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Fresh generator for one request
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
