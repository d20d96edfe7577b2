pub mod launcher;
pub mod objective;
pub mod observer;
pub mod options;

pub use launcher::{maximize, minimize, EvolutionLauncher, Optimum};
pub use objective::{with_arity, Fallible, Negated, Objective, WithArity};
pub use observer::{GenerationObserver, GenerationStats, TracingObserver};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, Verbosity};
