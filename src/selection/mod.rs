pub mod weighted;

pub use weighted::{weighted_choice, weighted_index};
