//! # Evaluation backends
//!
//! An `EvaluationBackend` computes the fitness of a whole batch of coordinate
//! vectors. Results come back in the order of the batch, and a call only returns
//! once every evaluation of the batch has finished.
//!
//! ## Example
//!
//! ```rust
//! use genmax::evaluation::{EvaluationBackend, ParallelEvaluator, SequentialEvaluator};
//!
//! let objective = |x: &[f64]| x[0] * 2.0;
//! let points = [[1.0], [2.0], [3.0]];
//! let batch: Vec<&[f64]> = points.iter().map(|p| &p[..]).collect();
//!
//! let sequential = SequentialEvaluator::new();
//! assert_eq!(sequential.evaluate_batch(&objective, &batch).unwrap(), vec![2.0, 4.0, 6.0]);
//!
//! let parallel = ParallelEvaluator::new(2).unwrap();
//! assert_eq!(parallel.evaluate_batch(&objective, &batch).unwrap(), vec![2.0, 4.0, 6.0]);
//! ```

pub mod parallel;
pub mod sequential;

use std::fmt::Debug;

use crate::{error::Result, evolution::objective::Objective};

pub use parallel::ParallelEvaluator;
pub use sequential::SequentialEvaluator;

/// Evaluates an objective over batches of coordinate vectors.
pub trait EvaluationBackend: Debug + Send + Sync {
    /// Returns one fitness value per entry of `batch`, in the same order.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::ObjectiveEvaluation` if any evaluation fails. No partial
    /// results are returned.
    fn evaluate_batch(&self, objective: &dyn Objective, batch: &[&[f64]]) -> Result<Vec<f64>>;
}

/// Picks the backend for a population: a pool of `worker_count` threads when
/// `parallel` is set, in-process sequential evaluation otherwise.
pub fn backend_for(parallel: bool, worker_count: usize) -> Result<Box<dyn EvaluationBackend>> {
    if parallel {
        Ok(Box::new(ParallelEvaluator::new(worker_count)?))
    } else {
        Ok(Box::new(SequentialEvaluator::new()))
    }
}
