use crate::{candidate::Candidate, evolution::objective::Objective};

use super::Population;

impl<O: Objective> Population<O> {
    /// Recomputes `mean_fitness` and assigns `fitness_rank` (0 = greatest fitness).
    ///
    /// Does nothing while the fitness ranks are still valid.
    pub fn rank_by_fitness(&mut self) {
        if self.ranks.fitness {
            return;
        }

        self.mean_fitness =
            self.candidates.iter().map(Candidate::score).sum::<f64>() / self.size as f64;

        let order = descending_order(&self.candidates, Candidate::score);
        for (rank, index) in order.into_iter().enumerate() {
            self.candidates[index].fitness_rank = rank;
        }

        self.ranks.fitness = true;
    }

    /// Recomputes the mean coordinates, every member's L1 diversity and
    /// `mean_diversity`, and assigns `diversity_rank` (0 = farthest from the mean).
    ///
    /// Does nothing while the diversity ranks are still valid.
    pub fn rank_by_diversity(&mut self) {
        if self.ranks.diversity {
            return;
        }

        let count = self.size as f64;
        let mut mean = vec![0.0; self.space.dimensions()];
        // Dividing each term keeps the mean finite for coordinates near f64::MAX.
        for candidate in &self.candidates {
            for (sum, value) in mean.iter_mut().zip(&candidate.coordinates) {
                *sum += value / count;
            }
        }

        let mut total = 0.0;
        for candidate in &mut self.candidates {
            candidate.diversity = candidate
                .coordinates
                .iter()
                .zip(&mean)
                .map(|(value, centre)| (value - centre).abs())
                .sum();
            total += candidate.diversity;
        }
        self.mean_diversity = total / count;
        self.mean_coordinates = mean;

        let order = descending_order(&self.candidates, Candidate::diversity);
        for (rank, index) in order.into_iter().enumerate() {
            self.candidates[index].diversity_rank = rank;
        }

        self.ranks.diversity = true;
    }
}

/// Indices of `candidates` sorted by descending `key`; equal keys keep member order.
fn descending_order<F>(candidates: &[Candidate], key: F) -> Vec<usize>
where
    F: Fn(&Candidate) -> f64,
{
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| key(&candidates[b]).total_cmp(&key(&candidates[a])));
    order
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::bounds::SearchSpace;

    #[test]
    fn test_descending_order_is_stable() {
        let space: Arc<SearchSpace> = SearchSpace::new(1, &[], 1.0).unwrap().shared();
        let candidates: Vec<Candidate> = [2.0, 5.0, 2.0, 7.0]
            .iter()
            .map(|&x| {
                let mut candidate = Candidate::with_coordinates(&space, vec![x]);
                candidate.fitness = Some(x);
                candidate
            })
            .collect();

        assert_eq!(descending_order(&candidates, Candidate::score), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_unevaluated_candidates_rank_last() {
        let space: Arc<SearchSpace> = SearchSpace::new(1, &[], 1.0).unwrap().shared();
        let mut evaluated = Candidate::with_coordinates(&space, vec![1.0]);
        evaluated.fitness = Some(-1e9);
        let pending = Candidate::with_coordinates(&space, vec![2.0]);

        let candidates = vec![pending, evaluated];
        assert_eq!(descending_order(&candidates, Candidate::score), vec![1, 0]);
    }
}
