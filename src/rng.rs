//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps the `rand` crate's `StdRng` and
//! provides the handful of draws the optimizer needs: uniform reals, uniform
//! indices and probability checks. Seeding it makes a whole optimization run
//! reproducible.
//!
//! ## Example
//!
//! ```rust
//! use genmax::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//!
//! for _ in 0..5 {
//!     let number = rng.uniform_inclusive(-1.0, 1.0);
//!     assert!((-1.0..=1.0).contains(&number));
//! }
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides methods for generating
/// random numbers within a specified range.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a seeded generator when `seed` is given, an entropy-seeded one otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::new(),
        }
    }

    /// Draws a single value from the closed range `[from, to]`.
    ///
    /// Interpolates between the endpoints instead of scaling by `to - from`, so any
    /// pair of finite endpoints works even when their distance exceeds `f64::MAX`.
    /// `from == to` is allowed and returns `from`.
    ///
    /// # Arguments
    ///
    /// * `from` - The lower endpoint. The caller guarantees `from <= to`.
    /// * `to` - The upper endpoint.
    ///
    /// # Returns
    ///
    /// A value `v` with `from <= v <= to`.
    pub fn uniform_inclusive(&mut self, from: f64, to: f64) -> f64 {
        let t = self.unit();
        (from * (1.0 - t) + to * t).clamp(from, to)
    }

    /// Draws a value from `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Draws an index uniformly from `[from, to)`.
    pub fn index(&mut self, from: usize, to: usize) -> usize {
        self.rng.gen_range(from..to)
    }

    /// Returns `true` with the given probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
