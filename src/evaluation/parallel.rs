use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use super::EvaluationBackend;
use crate::{
    error::{GeneticError, Result},
    evolution::objective::{evaluate_checked, Objective},
};

/// Evaluates batches on a dedicated pool of worker threads.
///
/// The pool is built once and reused for every batch. Its threads are shut down
/// when the evaluator is dropped, so a population owning the evaluator releases
/// them on every exit path, including a failed evaluation.
#[derive(Debug)]
pub struct ParallelEvaluator {
    pool: ThreadPool,
    worker_count: usize,
}

impl ParallelEvaluator {
    /// Creates a pool of `worker_count` worker threads.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `worker_count` is zero and
    /// `GeneticError::WorkerPool` if the threads cannot be spawned.
    pub fn new(worker_count: usize) -> Result<Self> {
        if worker_count == 0 {
            return Err(GeneticError::Configuration(
                "Worker count must be greater than 0".to_string(),
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .thread_name(|index| format!("genmax-worker-{}", index))
            .build()
            .map_err(|e| GeneticError::WorkerPool(e.to_string()))?;

        debug!(worker_count, "started evaluation worker pool");
        Ok(Self { pool, worker_count })
    }
}

impl EvaluationBackend for ParallelEvaluator {
    fn evaluate_batch(&self, objective: &dyn Objective, batch: &[&[f64]]) -> Result<Vec<f64>> {
        // Indexed collect keeps batch order and returns only after every worker is done.
        self.pool.install(|| {
            batch
                .par_iter()
                .map(|coordinates| evaluate_checked(objective, coordinates))
                .collect()
        })
    }
}

impl Drop for ParallelEvaluator {
    fn drop(&mut self) {
        debug!(worker_count = self.worker_count, "releasing evaluation worker pool");
    }
}
