use super::EvaluationBackend;
use crate::{
    error::Result,
    evolution::objective::{evaluate_checked, Objective},
};

/// Evaluates candidates one at a time on the calling thread.
#[derive(Debug, Clone, Default)]
pub struct SequentialEvaluator;

impl SequentialEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl EvaluationBackend for SequentialEvaluator {
    fn evaluate_batch(&self, objective: &dyn Objective, batch: &[&[f64]]) -> Result<Vec<f64>> {
        batch
            .iter()
            .map(|coordinates| evaluate_checked(objective, coordinates))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::GeneticError;
    use crate::evolution::objective::Fallible;

    #[test]
    fn test_preserves_order() {
        let evaluator = SequentialEvaluator::new();
        let points = [[3.0], [1.0], [2.0]];
        let batch: Vec<&[f64]> = points.iter().map(|p| &p[..]).collect();

        let values = evaluator.evaluate_batch(&|x: &[f64]| x[0] * 10.0, &batch).unwrap();
        assert_eq!(values, vec![30.0, 10.0, 20.0]);
    }

    #[test]
    fn test_stops_at_first_failure() {
        let calls = AtomicUsize::new(0);
        let objective = Fallible::new(|x: &[f64]| {
            calls.fetch_add(1, Ordering::SeqCst);
            if x[0] < 0.0 {
                Err("negative input")
            } else {
                Ok(x[0])
            }
        });
        let points = [[1.0], [-1.0], [2.0]];
        let batch: Vec<&[f64]> = points.iter().map(|p| &p[..]).collect();

        let result = SequentialEvaluator::new().evaluate_batch(&objective, &batch);

        assert!(matches!(result, Err(GeneticError::ObjectiveEvaluation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_empty_batch() {
        let values = SequentialEvaluator::new()
            .evaluate_batch(&|x: &[f64]| x[0], &Vec::new())
            .unwrap();
        assert!(values.is_empty());
    }
}
