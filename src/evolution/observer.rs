//! # Generation observers
//!
//! After every generation the population hands its statistics to a
//! `GenerationObserver`. The default `TracingObserver` emits them as `tracing`
//! events; install a subscriber (for example `tracing-subscriber`) to see them.

use std::fmt::Debug;

use tracing::info;

use super::options::Verbosity;

/// Summary statistics of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub mean_fitness: f64,
    pub mean_diversity: f64,
}

/// Receives the statistics of each completed generation.
pub trait GenerationObserver: Debug + Send + Sync {
    fn observe(&self, stats: &GenerationStats, verbosity: Verbosity);
}

/// Reports generations as `info` level tracing events.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver;

impl GenerationObserver for TracingObserver {
    fn observe(&self, stats: &GenerationStats, verbosity: Verbosity) {
        match verbosity {
            Verbosity::Silent => {}
            Verbosity::Minimal => {
                info!(generation = stats.generation, "generation complete");
            }
            Verbosity::Statistics => {
                info!(
                    generation = stats.generation,
                    mean_fitness = stats.mean_fitness,
                    mean_diversity = stats.mean_diversity,
                    "generation complete"
                );
            }
        }
    }
}
