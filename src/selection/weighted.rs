use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Draws one item with probability proportional to its weight.
///
/// Weights are normalized to `p_i = w_i / Σw` and sampled through their cumulative
/// sum. Items with zero weight are never returned.
///
/// # Errors
///
/// Returns `GeneticError::Selection` if `items` is empty, the lengths differ, a
/// weight is negative or not finite, or all weights are zero.
///
/// # Examples
///
/// ```
/// use genmax::rng::RandomNumberGenerator;
/// use genmax::selection::weighted_choice;
///
/// let mut rng = RandomNumberGenerator::new();
/// let picked = weighted_choice(&["a", "b", "c"], &[1.0, 0.0, 0.0], &mut rng).unwrap();
/// assert_eq!(*picked, "a");
/// ```
pub fn weighted_choice<'a, T>(
    items: &'a [T],
    weights: &[f64],
    rng: &mut RandomNumberGenerator,
) -> Result<&'a T> {
    if items.len() != weights.len() {
        return Err(GeneticError::Selection(format!(
            "Got {} items but {} weights",
            items.len(),
            weights.len()
        )));
    }
    let index = weighted_index(weights, rng)?;
    Ok(&items[index])
}

/// Draws an index into `weights` with probability proportional to its weight.
///
/// # Errors
///
/// Same as [`weighted_choice`].
pub fn weighted_index(weights: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
    let cumulative = cumulative_probabilities(weights)?;
    let threshold = rng.unit();

    // The last entry is forced to 1.0, so a threshold in [0, 1) always finds a slot.
    Ok(cumulative
        .iter()
        .position(|&p| threshold < p)
        .unwrap_or(cumulative.len() - 1))
}

fn cumulative_probabilities(weights: &[f64]) -> Result<Vec<f64>> {
    if weights.is_empty() {
        return Err(GeneticError::Selection(
            "Cannot select from an empty set".to_string(),
        ));
    }

    if let Some(weight) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(GeneticError::Selection(format!(
            "Weights must be finite and non-negative, got {}",
            weight
        )));
    }

    let sum: f64 = weights.iter().sum();
    if sum == 0.0 {
        return Err(GeneticError::Selection(
            "At least one weight must be non-zero".to_string(),
        ));
    }

    let mut cumulative = 0.0;
    let mut probabilities: Vec<f64> = weights
        .iter()
        .map(|w| {
            cumulative += w / sum;
            cumulative
        })
        .collect();

    // Pin the tail to 1.0 against rounding, without lifting trailing zero-weight slots
    // above the last non-zero one.
    if let Some(last_nonzero) = weights.iter().rposition(|w| *w > 0.0) {
        for p in &mut probabilities[last_nonzero..] {
            *p = 1.0;
        }
    }

    Ok(probabilities)
}
