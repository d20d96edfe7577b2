//! # genmax
//!
//! A genetic algorithm that searches a bounded, continuous, multi-dimensional
//! domain for the input that maximizes (or minimizes) a black-box function.
//!
//! ```rust
//! use genmax::{maximize, EvolutionOptions};
//!
//! let options = EvolutionOptions::builder()
//!     .dimensions(2)
//!     .boundaries(vec![(0.0, 100.0), (0.0, 100.0)])
//!     .generations(20)
//!     .seed(42)
//!     .build();
//!
//! let best = maximize(|x: &[f64]| -((x[0] - 50.0).powi(2) + (x[1] - 50.0).powi(2)), &options)?;
//! assert_eq!(best.coordinates.len(), 2);
//! # Ok::<(), genmax::GeneticError>(())
//! ```

pub mod bounds;
pub mod breeding;
pub mod candidate;
pub mod error;
pub mod evaluation;
pub mod evolution;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{maximize, minimize, EvolutionLauncher, EvolutionOptions, Optimum, Verbosity};
