//! # Error Types
//!
//! This module defines the error type shared by every part of the optimizer.
//! Configuration problems surface when a population is built, crossover
//! problems surface while breeding, and objective failures surface whenever a
//! batch of candidates is evaluated.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genmax::error::{GeneticError, Result};
//!
//! fn check_fraction(value: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&value) {
//!         return Err(GeneticError::Configuration(format!(
//!             "fraction must be in range [0,1], got {}",
//!             value
//!         )));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(check_fraction(0.5).is_ok());
//! assert!(check_fraction(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genmax::error::{GeneticError, OptionExt};
//!
//! fn first_fitness(values: &[f64]) -> genmax::error::Result<f64> {
//!     values.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the optimizer.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// An invalid parameter was supplied when building a population.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Two candidates from different populations were crossed over.
    #[error("Crossover error: {0}")]
    Crossover(String),

    /// The objective function failed or produced a non-numeric value.
    #[error("Objective evaluation error: {0}")]
    ObjectiveEvaluation(String),

    /// The weights handed to weighted selection do not describe a distribution.
    #[error("Selection error: {0}")]
    Selection(String),

    /// The worker pool used for parallel evaluation could not be created.
    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized Result type for optimizer operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GeneticError::Configuration("elite_fraction out of range".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: elite_fraction out of range"
        );

        let err = GeneticError::Crossover("different populations".to_string());
        assert_eq!(err.to_string(), "Crossover error: different populations");

        let err = GeneticError::EmptyPopulation;
        assert!(err.to_string().contains("empty population"));
    }

    #[test]
    fn test_option_ext() {
        let empty: Option<f64> = None;
        let result = empty.ok_or_else_genetic(|| GeneticError::EmptyPopulation);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));

        let present = Some(1.0).ok_or_else_genetic(|| GeneticError::EmptyPopulation);
        assert_eq!(present.unwrap(), 1.0);
    }
}
