//! # Objective
//!
//! The `Objective` trait is the function being optimized. Any
//! `Fn(&[f64]) -> f64 + Send + Sync` closure is an objective; the wrappers in
//! this module cover fallible functions, functions with a declared arity and
//! negation for minimization.
//!
//! ## Example
//!
//! ```rust
//! use genmax::evolution::objective::{with_arity, Objective};
//!
//! let paraboloid = |x: &[f64]| -(x[0] * x[0] + x[1] * x[1]);
//! assert_eq!(paraboloid.evaluate(&[1.0, 2.0]).unwrap(), -5.0);
//!
//! let declared = with_arity(2, paraboloid);
//! assert_eq!(declared.arity(), Some(2));
//! assert!(declared.evaluate(&[1.0]).is_err());
//! ```

use std::fmt::Display;

use crate::error::{GeneticError, Result};

/// A real-valued function over coordinate vectors.
pub trait Objective: Send + Sync {
    /// Evaluates the function at `coordinates`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::ObjectiveEvaluation` if the function cannot be
    /// evaluated at `coordinates`.
    fn evaluate(&self, coordinates: &[f64]) -> Result<f64>;

    /// The number of inputs the function expects, when it is known.
    ///
    /// Used to infer the dimensionality of a population when none is configured.
    fn arity(&self) -> Option<usize> {
        None
    }
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, coordinates: &[f64]) -> Result<f64> {
        Ok(self(coordinates))
    }
}

/// Evaluates `objective` and rejects NaN results.
pub(crate) fn evaluate_checked<O>(objective: &O, coordinates: &[f64]) -> Result<f64>
where
    O: Objective + ?Sized,
{
    let value = objective.evaluate(coordinates)?;
    if value.is_nan() {
        return Err(GeneticError::ObjectiveEvaluation(format!(
            "Objective returned a non-numeric value at {:?}",
            coordinates
        )));
    }
    Ok(value)
}

/// Lends an objective to a population without giving up ownership.
pub(crate) struct Borrowed<'a, O: ?Sized>(pub(crate) &'a O);

impl<O: Objective + ?Sized> Objective for Borrowed<'_, O> {
    fn evaluate(&self, coordinates: &[f64]) -> Result<f64> {
        self.0.evaluate(coordinates)
    }

    fn arity(&self) -> Option<usize> {
        self.0.arity()
    }
}

/// The negation `g(x) = -f(x)` of an objective.
#[derive(Debug, Clone)]
pub struct Negated<O> {
    inner: O,
}

impl<O: Objective> Negated<O> {
    pub fn new(inner: O) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<O: Objective> Objective for Negated<O> {
    fn evaluate(&self, coordinates: &[f64]) -> Result<f64> {
        self.inner.evaluate(coordinates).map(|value| -value)
    }

    fn arity(&self) -> Option<usize> {
        self.inner.arity()
    }
}

/// An objective backed by a closure that may fail.
///
/// ```rust
/// use genmax::evolution::objective::{Fallible, Objective};
///
/// let log_sum = Fallible::new(|x: &[f64]| {
///     let sum: f64 = x.iter().sum();
///     if sum <= 0.0 {
///         return Err("logarithm of a non-positive number");
///     }
///     Ok(sum.ln())
/// });
///
/// assert!(log_sum.evaluate(&[1.0, 2.0]).is_ok());
/// assert!(log_sum.evaluate(&[-1.0, 0.0]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Fallible<F> {
    function: F,
}

impl<F> Fallible<F> {
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F, E> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> std::result::Result<f64, E> + Send + Sync,
    E: Display,
{
    fn evaluate(&self, coordinates: &[f64]) -> Result<f64> {
        (self.function)(coordinates).map_err(|e| {
            GeneticError::ObjectiveEvaluation(format!(
                "Objective failed at {:?}: {}",
                coordinates, e
            ))
        })
    }
}

/// An objective with a declared number of inputs.
#[derive(Debug, Clone)]
pub struct WithArity<O> {
    arity: usize,
    inner: O,
}

/// Declares that `objective` takes exactly `arity` inputs.
pub fn with_arity<O: Objective>(arity: usize, objective: O) -> WithArity<O> {
    WithArity {
        arity,
        inner: objective,
    }
}

impl<O: Objective> Objective for WithArity<O> {
    fn evaluate(&self, coordinates: &[f64]) -> Result<f64> {
        if coordinates.len() != self.arity {
            return Err(GeneticError::ObjectiveEvaluation(format!(
                "Objective takes {} arguments but was called with {}",
                self.arity,
                coordinates.len()
            )));
        }
        self.inner.evaluate(coordinates)
    }

    fn arity(&self) -> Option<usize> {
        Some(self.arity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_objective() {
        let sum = |x: &[f64]| x.iter().sum::<f64>();

        assert_eq!(sum.evaluate(&[1.0, 2.0, 3.0]).unwrap(), 6.0);
        assert_eq!(sum.arity(), None);
    }

    #[test]
    fn test_negated() {
        let sum = |x: &[f64]| x.iter().sum::<f64>();
        let negated = Negated::new(with_arity(2, sum));

        assert_eq!(negated.evaluate(&[1.0, 2.0]).unwrap(), -3.0);
        assert_eq!(negated.arity(), Some(2));
        assert_eq!(negated.inner().evaluate(&[1.0, 2.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_fallible_error_is_objective_evaluation() {
        let failing = Fallible::new(|_: &[f64]| Err::<f64, _>("boom"));

        match failing.evaluate(&[1.0]) {
            Err(GeneticError::ObjectiveEvaluation(msg)) => assert!(msg.contains("boom")),
            _ => panic!("Expected ObjectiveEvaluation error"),
        }
    }

    #[test]
    fn test_with_arity_rejects_wrong_length() {
        let objective = with_arity(3, |x: &[f64]| x[0] + x[1] + x[2]);

        assert!(objective.evaluate(&[1.0, 2.0, 3.0]).is_ok());
        assert!(matches!(
            objective.evaluate(&[1.0, 2.0]),
            Err(GeneticError::ObjectiveEvaluation(_))
        ));
    }

    #[test]
    fn test_evaluate_checked_rejects_nan() {
        let nan = |_: &[f64]| f64::NAN;
        assert!(matches!(
            evaluate_checked(&nan, &[0.0]),
            Err(GeneticError::ObjectiveEvaluation(_))
        ));

        let infinite = |_: &[f64]| f64::NEG_INFINITY;
        assert_eq!(evaluate_checked(&infinite, &[0.0]).unwrap(), f64::NEG_INFINITY);
    }
}
