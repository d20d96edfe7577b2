//! # Candidate
//!
//! A `Candidate` is one point of the search space together with the fitness
//! and diversity bookkeeping its population maintains for it.
//!
//! ## Example
//!
//! ```rust
//! use genmax::bounds::{Bound, SearchSpace};
//! use genmax::candidate::Candidate;
//! use genmax::rng::RandomNumberGenerator;
//!
//! let space = SearchSpace::new(2, &[Bound::new(-1.0, 1.0)], 0.5).unwrap().shared();
//! let mut rng = RandomNumberGenerator::from_seed(3);
//!
//! let mut candidate = Candidate::random(&space, &mut rng);
//! candidate.evaluate(&|x: &[f64]| x[0] + x[1]).unwrap();
//! assert!(candidate.fitness().is_some());
//!
//! candidate.mutate(&mut rng);
//! assert!(space.contains(candidate.coordinates()));
//! ```

use std::sync::Arc;

use crate::{
    bounds::SearchSpace,
    error::Result,
    evolution::objective::{evaluate_checked, Objective},
    rng::RandomNumberGenerator,
};

/// A point in the search space and its ranking metadata.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub(crate) coordinates: Vec<f64>,
    pub(crate) fitness: Option<f64>,
    pub(crate) diversity: f64,
    pub(crate) fitness_rank: usize,
    pub(crate) diversity_rank: usize,
    pub(crate) space: Arc<SearchSpace>,
}

impl Candidate {
    /// Creates a candidate with every coordinate drawn uniformly from its bound.
    ///
    /// # Arguments
    ///
    /// * `space` - The search space of the population the candidate belongs to.
    /// * `rng` - The random number generator to draw the coordinates with.
    ///
    /// # Returns
    ///
    /// An unevaluated candidate inside `space`.
    pub fn random(space: &Arc<SearchSpace>, rng: &mut RandomNumberGenerator) -> Self {
        let coordinates = space
            .bounds()
            .iter()
            .map(|bound| rng.uniform_inclusive(bound.lower, bound.upper))
            .collect();
        Self::with_coordinates(space, coordinates)
    }

    /// Creates an unevaluated candidate at `coordinates`.
    pub(crate) fn with_coordinates(space: &Arc<SearchSpace>, coordinates: Vec<f64>) -> Self {
        Self {
            coordinates,
            fitness: None,
            diversity: 0.0,
            fitness_rank: 0,
            diversity_rank: 0,
            space: Arc::clone(space),
        }
    }

    /// Sets the fitness to `objective(coordinates)` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::ObjectiveEvaluation` if the objective fails or
    /// returns NaN. The previous fitness is kept in that case.
    pub fn evaluate<O>(&mut self, objective: &O) -> Result<f64>
    where
        O: Objective + ?Sized,
    {
        let fitness = evaluate_checked(objective, &self.coordinates)?;
        self.fitness = Some(fitness);
        Ok(fitness)
    }

    /// Perturbs one randomly chosen coordinate by at most the mutation range,
    /// clamped into that dimension's bound. Invalidates the fitness.
    pub fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
        let dimension = rng.index(0, self.coordinates.len());
        let range = self.space.mutation_range();
        let bound = self.space.bounds()[dimension];

        let perturbed = self.coordinates[dimension] + rng.uniform_inclusive(-range, range);
        self.coordinates[dimension] = bound.clamp(perturbed);
        self.fitness = None;
    }

    /// The position of the candidate, one value per dimension.
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// The objective value at the coordinates, `None` until evaluated.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// L1 distance from the population's mean coordinates at the last diversity ranking.
    pub fn diversity(&self) -> f64 {
        self.diversity
    }

    /// 0 is the fittest candidate.
    pub fn fitness_rank(&self) -> usize {
        self.fitness_rank
    }

    /// 0 is the candidate farthest from the mean.
    pub fn diversity_rank(&self) -> usize {
        self.diversity_rank
    }

    /// The number of coordinates.
    pub fn dimensions(&self) -> usize {
        self.coordinates.len()
    }

    /// The search space shared with the rest of the candidate's population.
    pub fn space(&self) -> &Arc<SearchSpace> {
        &self.space
    }

    /// Returns `true` if both candidates were created for the same population.
    pub fn same_lineage(&self, other: &Candidate) -> bool {
        Arc::ptr_eq(&self.space, &other.space)
    }

    /// Fitness used for ordering; unevaluated candidates sort last.
    pub(crate) fn score(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }
}
