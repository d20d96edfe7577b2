pub mod crossover;

pub use crossover::crossover;
