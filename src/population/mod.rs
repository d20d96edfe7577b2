//! # Population
//!
//! A `Population` owns a fixed number of candidates, the objective they are
//! scored with, the evaluation backend and the random number generator. Each
//! call to [`Population::iterate`] runs one generation: elitist breeding,
//! mutation, then re-ranking by fitness and by diversity.
//!
//! ## Example
//!
//! ```rust
//! use genmax::evolution::options::EvolutionOptions;
//! use genmax::population::Population;
//!
//! let options = EvolutionOptions::builder()
//!     .dimensions(2)
//!     .population_size(20)
//!     .seed(5)
//!     .build();
//!
//! let mut population = Population::new(|x: &[f64]| -(x[0] - 50.0).abs() - (x[1] - 50.0).abs(), &options)?;
//! population.converge(10)?;
//!
//! let best = population.best()?;
//! assert_eq!(population.generation(), 11);
//! assert_eq!(best.dimensions(), 2);
//! # Ok::<(), genmax::error::GeneticError>(())
//! ```

mod ranking;

use std::sync::Arc;

use tracing::debug;

use crate::{
    bounds::SearchSpace,
    breeding::crossover,
    candidate::Candidate,
    error::{GeneticError, OptionExt, Result},
    evaluation::{backend_for, EvaluationBackend},
    evolution::{
        objective::Objective,
        observer::{GenerationObserver, GenerationStats, TracingObserver},
        options::{EvolutionOptions, Verbosity},
    },
    rng::RandomNumberGenerator,
    selection::weighted_index,
};

/// Tracks which rank sets match the current members.
#[derive(Debug, Clone, Copy, Default)]
struct RankValidity {
    fitness: bool,
    diversity: bool,
}

/// A fixed-size set of candidates evolving toward the maximum of an objective.
///
/// The population owns everything a run needs: the objective, the shared search
/// space, the evaluation backend, the optional observer and the random number
/// generator. Fitness ranks, diversity ranks and the mean statistics are kept
/// current by [`Population::rank_by_fitness`] and [`Population::rank_by_diversity`],
/// which only recompute after the members changed.
pub struct Population<O: Objective> {
    objective: O,
    candidates: Vec<Candidate>,
    space: Arc<SearchSpace>,
    size: usize,
    elite_count: usize,
    mutation_probability: f64,
    verbosity: Verbosity,
    generation: usize,
    mean_fitness: f64,
    mean_coordinates: Vec<f64>,
    mean_diversity: f64,
    ranks: RankValidity,
    backend: Box<dyn EvaluationBackend>,
    observer: Option<Box<dyn GenerationObserver>>,
    rng: RandomNumberGenerator,
}

impl<O: Objective> Population<O> {
    /// Builds, evaluates and ranks a random initial population.
    ///
    /// The evaluation backend follows `options`: a worker pool when parallel
    /// evaluation is enabled, sequential evaluation otherwise.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` for invalid options (see
    /// [`EvolutionOptions::validate`] and [`SearchSpace::new`]) or when the
    /// dimensionality is neither configured nor declared by the objective, or the
    /// two disagree. Returns `GeneticError::ObjectiveEvaluation` if an initial
    /// candidate cannot be evaluated.
    pub fn new(objective: O, options: &EvolutionOptions) -> Result<Self> {
        options.validate()?;
        let backend = backend_for(options.is_parallel(), options.get_worker_count())?;
        Self::with_backend(objective, options, backend)
    }

    /// Like [`Population::new`] but evaluates with the given backend.
    ///
    /// # Arguments
    ///
    /// * `objective` - The function to maximize.
    /// * `options` - Population size, bounds, rates, seed and verbosity.
    ///   The `parallel` and `worker_count` settings are ignored.
    /// * `backend` - Evaluates every batch of new or mutated candidates.
    ///
    /// # Returns
    ///
    /// An evaluated and ranked population at generation 1.
    pub fn with_backend(
        objective: O,
        options: &EvolutionOptions,
        backend: Box<dyn EvaluationBackend>,
    ) -> Result<Self> {
        options.validate()?;
        let dimensions = resolve_dimensions(&objective, options)?;
        let space = SearchSpace::new(
            dimensions,
            options.get_boundaries(),
            options.get_mutation_range(),
        )?
        .shared();

        let mut rng = RandomNumberGenerator::from_optional_seed(options.get_seed());
        let size = options.get_population_size();
        let candidates = (0..size)
            .map(|_| Candidate::random(&space, &mut rng))
            .collect();

        let observer: Option<Box<dyn GenerationObserver>> = match options.get_verbosity() {
            Verbosity::Silent => None,
            _ => Some(Box::new(TracingObserver)),
        };

        let mut population = Self {
            objective,
            candidates,
            space,
            size,
            elite_count: options.elite_count(),
            mutation_probability: options.get_mutation_probability(),
            verbosity: options.get_verbosity(),
            generation: 1,
            mean_fitness: 0.0,
            mean_coordinates: vec![0.0; dimensions],
            mean_diversity: 0.0,
            ranks: RankValidity::default(),
            backend,
            observer,
            rng,
        };

        let everyone: Vec<usize> = (0..size).collect();
        population.evaluate_candidates(&everyone)?;
        population.rank_by_fitness();
        population.rank_by_diversity();

        debug!(
            size,
            dimensions,
            elite_count = population.elite_count,
            backend = ?population.backend,
            "population initialized"
        );
        Ok(population)
    }

    /// Replaces the generation observer. Observers are only called when the
    /// verbosity is not `Verbosity::Silent`.
    pub fn with_observer<G>(mut self, observer: G) -> Self
    where
        G: GenerationObserver + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Draws one parent index with weight `1 / (1 + fitness_rank + diversity_rank)`.
    ///
    /// Refreshes both rank sets first, so the weights always describe the current members.
    pub fn select_parent_index(&mut self) -> Result<usize> {
        self.rank_by_fitness();
        self.rank_by_diversity();
        let weights = self.selection_weights();
        weighted_index(&weights, &mut self.rng)
    }

    /// Replaces the members with the next generation.
    ///
    /// The `elite_count` fittest members are carried over unchanged. The remaining
    /// slots are filled with crossover children of two distinct weighted-selected
    /// parents, and only those children are evaluated.
    pub fn breed_generation(&mut self) -> Result<()> {
        self.rank_by_fitness();
        self.rank_by_diversity();
        self.candidates.sort_by_key(Candidate::fitness_rank);

        let weights = self.selection_weights();
        let mut next = Vec::with_capacity(self.size);
        next.extend(self.candidates.iter().take(self.elite_count).cloned());

        while next.len() < self.size {
            let first = weighted_index(&weights, &mut self.rng)?;
            let mut second = weighted_index(&weights, &mut self.rng)?;
            while second == first {
                second = weighted_index(&weights, &mut self.rng)?;
            }

            let (child, sibling) = crossover(
                &self.candidates[first],
                &self.candidates[second],
                &mut self.rng,
            )?;
            next.push(child);
            if next.len() < self.size {
                next.push(sibling);
            }
        }

        self.candidates = next;
        self.invalidate_ranks();

        let offspring: Vec<usize> = (self.elite_count..self.size).collect();
        self.evaluate_candidates(&offspring)?;

        debug!(
            generation = self.generation,
            elites = self.elite_count,
            offspring = offspring.len(),
            "bred generation"
        );
        Ok(())
    }

    /// Mutates each member with probability `mutation_probability` and
    /// re-evaluates the mutated ones.
    pub fn mutate_generation(&mut self) -> Result<()> {
        let mut mutated = Vec::new();
        for (index, candidate) in self.candidates.iter_mut().enumerate() {
            if self.rng.chance(self.mutation_probability) {
                candidate.mutate(&mut self.rng);
                mutated.push(index);
            }
        }

        if mutated.is_empty() {
            return Ok(());
        }

        self.invalidate_ranks();
        self.evaluate_candidates(&mutated)?;

        debug!(
            generation = self.generation,
            mutated = mutated.len(),
            "mutated generation"
        );
        Ok(())
    }

    /// Runs one generation: breed, mutate, re-rank, report, advance the counter.
    ///
    /// # Errors
    ///
    /// Any breeding or evaluation error aborts the generation and is returned as is.
    pub fn iterate(&mut self) -> Result<GenerationStats> {
        self.breed_generation()?;
        self.mutate_generation()?;
        self.rank_by_fitness();
        self.rank_by_diversity();

        let stats = GenerationStats {
            generation: self.generation,
            mean_fitness: self.mean_fitness,
            mean_diversity: self.mean_diversity,
        };

        if self.verbosity != Verbosity::Silent {
            if let Some(observer) = &self.observer {
                observer.observe(&stats, self.verbosity);
            }
        }

        self.generation += 1;
        Ok(stats)
    }

    /// Runs exactly `generations` generations.
    ///
    /// # Errors
    ///
    /// Stops at the first failing generation and returns its error.
    pub fn converge(&mut self, generations: usize) -> Result<()> {
        for _ in 0..generations {
            self.iterate()?;
        }
        Ok(())
    }

    /// The member with the greatest fitness; ties go to the earliest member.
    pub fn best(&self) -> Result<&Candidate> {
        let mut best: Option<&Candidate> = None;
        for candidate in &self.candidates {
            if best.map_or(true, |current| candidate.score() > current.score()) {
                best = Some(candidate);
            }
        }
        best.ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// The current members, in no particular order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The objective the members are scored with.
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// The search space shared by every member.
    pub fn space(&self) -> &Arc<SearchSpace> {
        &self.space
    }

    /// The fixed number of members.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of coordinates of every member.
    pub fn dimensions(&self) -> usize {
        self.space.dimensions()
    }

    /// How many of the fittest members survive each generation unchanged.
    pub fn elite_count(&self) -> usize {
        self.elite_count
    }

    /// Starts at 1 and grows by one per completed generation.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Mean fitness at the last fitness ranking.
    pub fn mean_fitness(&self) -> f64 {
        self.mean_fitness
    }

    /// Per-dimension mean of the coordinates at the last diversity ranking.
    pub fn mean_coordinates(&self) -> &[f64] {
        &self.mean_coordinates
    }

    /// Mean L1 distance from `mean_coordinates` at the last diversity ranking.
    pub fn mean_diversity(&self) -> f64 {
        self.mean_diversity
    }

    fn selection_weights(&self) -> Vec<f64> {
        self.candidates
            .iter()
            .map(|c| 1.0 / (1.0 + c.fitness_rank as f64 + c.diversity_rank as f64))
            .collect()
    }

    fn invalidate_ranks(&mut self) {
        self.ranks = RankValidity::default();
    }

    /// Evaluates the members at `indices` as one batch.
    fn evaluate_candidates(&mut self, indices: &[usize]) -> Result<()> {
        if indices.is_empty() {
            return Ok(());
        }

        let fitness = {
            let batch: Vec<&[f64]> = indices
                .iter()
                .map(|&index| self.candidates[index].coordinates())
                .collect();
            self.backend.evaluate_batch(&self.objective, &batch)?
        };

        if fitness.len() != indices.len() {
            return Err(GeneticError::ObjectiveEvaluation(format!(
                "Evaluation backend returned {} values for {} candidates",
                fitness.len(),
                indices.len()
            )));
        }

        for (&index, value) in indices.iter().zip(fitness) {
            self.candidates[index].fitness = Some(value);
        }
        Ok(())
    }
}

fn resolve_dimensions<O: Objective>(objective: &O, options: &EvolutionOptions) -> Result<usize> {
    match (options.get_dimensions(), objective.arity()) {
        (Some(dimensions), Some(arity)) if dimensions != arity => {
            Err(GeneticError::Configuration(format!(
                "Configured {} dimensions but the objective takes {} arguments",
                dimensions, arity
            )))
        }
        (Some(dimensions), _) => Ok(dimensions),
        (None, Some(arity)) => Ok(arity),
        (None, None) => Err(GeneticError::Configuration(
            "Number of dimensions was not given and cannot be inferred from the objective"
                .to_string(),
        )),
    }
}
