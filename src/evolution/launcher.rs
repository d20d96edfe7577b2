#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    objective::{evaluate_checked, Borrowed, Negated, Objective},
    options::EvolutionOptions,
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    population::Population,
};

/// The best point found by an optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Optimum {
    /// Coordinates of the best candidate.
    pub coordinates: Vec<f64>,
    /// The objective value at `coordinates`, as the caller's objective reports it.
    pub fitness: f64,
}

/// Runs optimizations of one objective.
///
/// # Example
///
/// ```rust
/// use genmax::evolution::{EvolutionLauncher, EvolutionOptions};
///
/// let launcher = EvolutionLauncher::new(|x: &[f64]| (x[0] - 3.0).powi(2) + (x[1] + 1.0).powi(2));
/// let options = EvolutionOptions::builder()
///     .dimensions(2)
///     .boundaries(vec![(-10.0, 10.0), (-10.0, 10.0)])
///     .generations(30)
///     .seed(1)
///     .build();
///
/// let lowest = launcher.minimize(&options)?;
/// assert!(lowest.fitness >= 0.0);
/// # Ok::<(), genmax::error::GeneticError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<O> {
    objective: O,
}

impl<O: Objective> EvolutionLauncher<O> {
    pub fn new(objective: O) -> Self {
        Self { objective }
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Searches for the coordinates with the greatest objective value.
    ///
    /// Builds a population from `options`, runs `options.get_generations()`
    /// generations and returns the best candidate.
    ///
    /// # Errors
    ///
    /// Returns any configuration, crossover or evaluation error raised by the run.
    pub fn maximize(&self, options: &EvolutionOptions) -> Result<Optimum> {
        let population = run(Borrowed(&self.objective), options)?;
        let best = population.best()?;
        let fitness = best.fitness().ok_or_else_genetic(|| {
            GeneticError::ObjectiveEvaluation("Best candidate was never evaluated".to_string())
        })?;
        Ok(Optimum {
            coordinates: best.coordinates().to_vec(),
            fitness,
        })
    }

    /// Searches for the coordinates with the smallest objective value.
    ///
    /// Maximizes the negated objective, then evaluates the winner with the
    /// objective itself so the reported fitness is the true value.
    pub fn minimize(&self, options: &EvolutionOptions) -> Result<Optimum> {
        let population = run(Negated::new(Borrowed(&self.objective)), options)?;
        let best = population.best()?;
        let coordinates = best.coordinates().to_vec();
        let fitness = evaluate_checked(population.objective().inner(), &coordinates)?;
        Ok(Optimum {
            coordinates,
            fitness,
        })
    }
}

fn run<O: Objective>(objective: O, options: &EvolutionOptions) -> Result<Population<O>> {
    let mut population = Population::new(objective, options)?;
    population.converge(options.get_generations())?;
    debug!(
        generations = options.get_generations(),
        mean_fitness = population.mean_fitness(),
        "optimization finished"
    );
    Ok(population)
}

/// Maximizes `objective` with the given options.
///
/// ```rust
/// use genmax::evolution::{maximize, EvolutionOptions};
///
/// let options = EvolutionOptions::builder().dimensions(1).seed(4).build();
/// let best = maximize(|x: &[f64]| -(x[0] - 25.0).abs(), &options)?;
/// assert_eq!(best.coordinates.len(), 1);
/// # Ok::<(), genmax::error::GeneticError>(())
/// ```
pub fn maximize<O: Objective>(objective: O, options: &EvolutionOptions) -> Result<Optimum> {
    EvolutionLauncher::new(objective).maximize(options)
}

/// Minimizes `objective` with the given options.
pub fn minimize<O: Objective>(objective: O, options: &EvolutionOptions) -> Result<Optimum> {
    EvolutionLauncher::new(objective).minimize(options)
}
