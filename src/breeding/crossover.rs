//! # Crossover
//!
//! Single-point crossover: both parents are cut at the same random index and the
//! tails are swapped.

use crate::{
    candidate::Candidate,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Produces two unevaluated children from two parents of the same population.
///
/// A split index `k` is drawn uniformly from `[1, dimensions - 1]`. The first child
/// takes `a[..k]` and `b[k..]`, the second takes `b[..k]` and `a[k..]`. For
/// one-dimensional candidates there is nothing to splice and the children are
/// unevaluated copies of the parents.
///
/// # Errors
///
/// Returns `GeneticError::Crossover` if the parents belong to different populations.
pub fn crossover(
    a: &Candidate,
    b: &Candidate,
    rng: &mut RandomNumberGenerator,
) -> Result<(Candidate, Candidate)> {
    let split = split_index(a, b, rng)?;
    Ok(crossover_at(a, b, split))
}

/// Draws the split index for `crossover`.
pub(crate) fn split_index(
    a: &Candidate,
    b: &Candidate,
    rng: &mut RandomNumberGenerator,
) -> Result<usize> {
    if !a.same_lineage(b) {
        return Err(GeneticError::Crossover(
            "Candidates are from different populations".to_string(),
        ));
    }

    let dimensions = a.dimensions();
    if dimensions < 2 {
        return Ok(dimensions);
    }
    Ok(rng.index(1, dimensions))
}

/// Splices two same-lineage parents at `split`.
pub(crate) fn crossover_at(a: &Candidate, b: &Candidate, split: usize) -> (Candidate, Candidate) {
    let splice = |head: &Candidate, tail: &Candidate| {
        let coordinates = head.coordinates[..split]
            .iter()
            .chain(&tail.coordinates[split..])
            .copied()
            .collect();
        Candidate::with_coordinates(&head.space, coordinates)
    };

    (splice(a, b), splice(b, a))
}
