//! Evolutionary search for inputs that trigger catastrophic backtracking.
//!
//! # Overview
//!
//! The search system consists of:
//!
//! - **Timing Harness** (`fitness`): step-bounded match timing per candidate
//! - **Mutation Operators** (`mutation`): single-character, multi-character, crossover
//! - **Vulnerability Screen** (`screen`): skips patterns with no risk-bearing tokens
//! - **Selector/Culler** (`select`): keeps the slowest unique candidates
//! - **Evolution Loop** (`search`): mutate, evaluate, cull under a wall-clock budget
//! - **Exploit Amplifier** (`pump`): repeats the slowest window up to a length cap
//! - **Reporter** (`report`): status, score and annotations
//!
//! # Example
//!
//! ```rust,no_run
//! use redos_hunter::schema::SearchConfig;
//! use redos_hunter::compute::evolution::{BacktrackTimer, EvolutionEngine};
//!
//! let config = SearchConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//! let timer = BacktrackTimer::new("(a+)+$", &config).unwrap();
//!
//! let mut engine = EvolutionEngine::new(config, &timer);
//! let result = engine.run_with_callback(vec!["aaaa".to_string()], |progress| {
//!     println!("Generation {}: worst = {:.4}s",
//!         progress.generation, progress.worst_time);
//! });
//!
//! let finals = engine.amplify(&result);
//! println!("Timed out: {}, final members: {}", result.timed_out, finals.len());
//! ```

mod fitness;
mod mutation;
mod pump;
mod report;
mod screen;
mod search;
mod select;

pub use fitness::{BacktrackTimer, MatchTimer, TimingError};
pub use mutation::{CandidateRng, PRINTABLE, printable_alphabet};
pub use pump::pump;
pub use report::{
    STATUS_FOUND, STATUS_NO_POTENTIAL, STATUS_NOT_FOUND, STATUS_UNSUPPORTED, build_output,
    no_potential, unsupported,
};
pub use screen::vulnerable_tokens_present;
pub use search::EvolutionEngine;
pub use select::{Measurement, cull};
