//! # Search space
//!
//! A [`SearchSpace`] is the per-dimension box a population searches in, together with
//! the maximum mutation step. Every candidate holds a shared handle to the space of the
//! population that created it, which is how crossover recognises candidates of the
//! same population.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{GeneticError, Result};

/// Lower bound used for dimensions without an explicit boundary.
pub const DEFAULT_LOWER: f64 = 0.0;
/// Upper bound used for dimensions without an explicit boundary.
pub const DEFAULT_UPPER: f64 = 100.0;

/// A closed interval `[lower, upper]` for one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bound {
    pub lower: f64,
    pub upper: f64,
}

impl Bound {
    /// Creates the interval `[lower, upper]`. Validation happens in [`SearchSpace::new`].
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Clamps `value` into `[lower, upper]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.lower).min(self.upper)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    fn validate(&self, dimension: usize) -> Result<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Boundary for dimension {} must be finite, got ({}, {})",
                dimension, self.lower, self.upper
            )));
        }
        if self.lower > self.upper {
            return Err(GeneticError::Configuration(format!(
                "Incorrect boundary for dimension {}: min {} greater than max {}",
                dimension, self.lower, self.upper
            )));
        }
        Ok(())
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self::new(DEFAULT_LOWER, DEFAULT_UPPER)
    }
}

impl From<(f64, f64)> for Bound {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

/// The validated box and mutation step shared by all candidates of a population.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpace {
    bounds: Vec<Bound>,
    mutation_range: f64,
}

impl SearchSpace {
    /// Builds a search space of `dimensions` dimensions.
    ///
    /// Missing boundaries are padded with `(0, 100)`. Boundaries beyond `dimensions`
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `dimensions` is zero, a boundary is
    /// inverted or not finite, or `mutation_range` is not a positive finite number.
    pub fn new(dimensions: usize, boundaries: &[Bound], mutation_range: f64) -> Result<Self> {
        if dimensions == 0 {
            return Err(GeneticError::Configuration(
                "Number of dimensions must be greater than 0".to_string(),
            ));
        }

        if !mutation_range.is_finite() || mutation_range <= 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Parameter 'mutation_range' must be a positive number, got {}",
                mutation_range
            )));
        }

        for (dimension, bound) in boundaries.iter().enumerate() {
            bound.validate(dimension)?;
        }

        if boundaries.len() > dimensions {
            warn!(
                supplied = boundaries.len(),
                dimensions, "more boundaries than dimensions, ignoring the extras"
            );
        }

        let mut bounds: Vec<Bound> = boundaries.iter().take(dimensions).copied().collect();
        bounds.resize(dimensions, Bound::default());

        Ok(Self {
            bounds,
            mutation_range,
        })
    }

    /// Wraps the space in the shared handle candidates carry.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// One bound per dimension.
    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    pub fn dimensions(&self) -> usize {
        self.bounds.len()
    }

    /// The largest step a single mutation may take.
    pub fn mutation_range(&self) -> f64 {
        self.mutation_range
    }

    /// Returns `true` if every coordinate lies within its dimension's bound.
    pub fn contains(&self, coordinates: &[f64]) -> bool {
        coordinates.len() == self.bounds.len()
            && coordinates
                .iter()
                .zip(&self.bounds)
                .all(|(value, bound)| bound.contains(*value))
    }
}
