//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every tunable parameter of an optimization
//! run: problem shape, population size, breeding and mutation rates, reporting and
//! evaluation settings, and the number of generations.
//!
//! ## Example
//!
//! ```rust
//! use genmax::bounds::Bound;
//! use genmax::evolution::options::{EvolutionOptions, Verbosity};
//!
//! // Defaults: 60 candidates, 15 generations, (0, 100) boundaries
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 60);
//!
//! let custom_options = EvolutionOptions::builder()
//!     .dimensions(3)
//!     .population_size(100)
//!     .boundaries(vec![Bound::new(-10.0, 10.0); 3])
//!     .elite_fraction(0.2)
//!     .verbosity(Verbosity::Minimal)
//!     .generations(40)
//!     .build();
//! assert_eq!(custom_options.get_dimensions(), Some(3));
//! ```
//!
//! ## Defaults
//!
//! | option | default |
//! |---|---|
//! | `dimensions` | inferred from the objective |
//! | `population_size` | 60 |
//! | `boundaries` | `(0, 100)` per dimension |
//! | `elite_fraction` | 0.1 |
//! | `mutation_probability` | 0.05 |
//! | `mutation_range` | 5.0 |
//! | `verbosity` | `Verbosity::Silent` |
//! | `parallel` | false |
//! | `worker_count` | 8 |
//! | `generations` | 15 |
//! | `seed` | none (entropy) |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bound;
use crate::error::{GeneticError, Result};

pub const DEFAULT_POPULATION_SIZE: usize = 60;
pub const DEFAULT_ELITE_FRACTION: f64 = 0.1;
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.05;
pub const DEFAULT_MUTATION_RANGE: f64 = 5.0;
pub const DEFAULT_WORKER_COUNT: usize = 8;
pub const DEFAULT_GENERATIONS: usize = 15;

/// How much progress information each generation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verbosity {
    /// No reporting.
    #[default]
    Silent,
    /// A generation marker only.
    Minimal,
    /// A generation marker with mean fitness and mean diversity.
    Statistics,
}

impl TryFrom<u8> for Verbosity {
    type Error = GeneticError;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            0 => Ok(Verbosity::Silent),
            1 => Ok(Verbosity::Minimal),
            2 => Ok(Verbosity::Statistics),
            other => Err(GeneticError::Configuration(format!(
                "Parameter 'verbosity' must be one of 0, 1 or 2, got {}",
                other
            ))),
        }
    }
}

impl From<Verbosity> for u8 {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Silent => 0,
            Verbosity::Minimal => 1,
            Verbosity::Statistics => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvolutionOptions {
    dimensions: Option<usize>,
    population_size: usize,
    boundaries: Vec<Bound>,
    elite_fraction: f64,
    mutation_probability: f64,
    mutation_range: f64,
    verbosity: Verbosity,
    parallel: bool,
    worker_count: usize,
    generations: usize,
    seed: Option<u64>,
}

impl EvolutionOptions {
    /// Returns a builder starting from the default options.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }

    /// Checks the value ranges that do not depend on the objective.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `elite_fraction` or
    /// `mutation_probability` is outside `[0, 1]`, the population has fewer than two
    /// candidates, or parallel evaluation is requested with no workers.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.elite_fraction) {
            return Err(GeneticError::Configuration(format!(
                "Parameter 'elite_fraction' must be in range [0,1], got {}",
                self.elite_fraction
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(GeneticError::Configuration(format!(
                "Parameter 'mutation_probability' must be in range [0,1], got {}",
                self.mutation_probability
            )));
        }

        if self.population_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }

        if self.parallel && self.worker_count == 0 {
            return Err(GeneticError::Configuration(
                "Worker count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// `floor(elite_fraction * population_size)`.
    pub fn elite_count(&self) -> usize {
        (self.elite_fraction * self.population_size as f64).floor() as usize
    }

    pub fn get_dimensions(&self) -> Option<usize> {
        self.dimensions
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_boundaries(&self) -> &[Bound] {
        &self.boundaries
    }

    pub fn get_elite_fraction(&self) -> f64 {
        self.elite_fraction
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_mutation_range(&self) -> f64 {
        self.mutation_range
    }

    pub fn get_verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn get_worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn get_generations(&self) -> usize {
        self.generations
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_dimensions(&mut self, dimensions: Option<usize>) {
        self.dimensions = dimensions;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_boundaries(&mut self, boundaries: Vec<Bound>) {
        self.boundaries = boundaries;
    }

    pub fn set_elite_fraction(&mut self, elite_fraction: f64) {
        self.elite_fraction = elite_fraction;
    }

    pub fn set_mutation_probability(&mut self, mutation_probability: f64) {
        self.mutation_probability = mutation_probability;
    }

    pub fn set_mutation_range(&mut self, mutation_range: f64) {
        self.mutation_range = mutation_range;
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn set_worker_count(&mut self, worker_count: usize) {
        self.worker_count = worker_count;
    }

    pub fn set_generations(&mut self, generations: usize) {
        self.generations = generations;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            dimensions: None,
            population_size: DEFAULT_POPULATION_SIZE,
            boundaries: Vec::new(),
            elite_fraction: DEFAULT_ELITE_FRACTION,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            mutation_range: DEFAULT_MUTATION_RANGE,
            verbosity: Verbosity::Silent,
            parallel: false,
            worker_count: DEFAULT_WORKER_COUNT,
            generations: DEFAULT_GENERATIONS,
            seed: None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset values keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    options: EvolutionOptions,
}

impl EvolutionOptionsBuilder {
    /// Sets the dimensionality of the search space.
    pub fn dimensions(mut self, value: usize) -> Self {
        self.options.dimensions = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.options.population_size = value;
        self
    }

    /// Sets the per-dimension boundaries. Missing dimensions default to `(0, 100)`.
    pub fn boundaries<B: Into<Bound>>(mut self, value: Vec<B>) -> Self {
        self.options.boundaries = value.into_iter().map(Into::into).collect();
        self
    }

    pub fn elite_fraction(mut self, value: f64) -> Self {
        self.options.elite_fraction = value;
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.options.mutation_probability = value;
        self
    }

    pub fn mutation_range(mut self, value: f64) -> Self {
        self.options.mutation_range = value;
        self
    }

    pub fn verbosity(mut self, value: Verbosity) -> Self {
        self.options.verbosity = value;
        self
    }

    /// Enables evaluation on a worker pool.
    pub fn parallel(mut self, value: bool) -> Self {
        self.options.parallel = value;
        self
    }

    pub fn worker_count(mut self, value: usize) -> Self {
        self.options.worker_count = value;
        self
    }

    pub fn generations(mut self, value: usize) -> Self {
        self.options.generations = value;
        self
    }

    /// Seeds the random number generator for a reproducible run.
    pub fn seed(mut self, value: u64) -> Self {
        self.options.seed = Some(value);
        self
    }

    pub fn build(self) -> EvolutionOptions {
        self.options
    }
}
