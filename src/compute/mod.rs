//! Compute module - Matching and evolutionary search.

pub mod backtrack;
pub mod evolution;

pub use evolution::{BacktrackTimer, EvolutionEngine, MatchTimer, Measurement};
