//! Result and progress types produced by the evolutionary search.

use serde::{Deserialize, Serialize};

/// Per-generation worst observed match times.
///
/// Append-only and diagnostic only; never part of the persisted output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionTrack {
    pub worst_times: Vec<f64>,
}

impl EvolutionTrack {
    pub fn push(&mut self, worst_time: f64) {
        self.worst_times.push(worst_time);
    }

    pub fn len(&self) -> usize {
        self.worst_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.worst_times.is_empty()
    }

    /// Slowest time observed across all generations.
    pub fn peak(&self) -> Option<f64> {
        self.worst_times.iter().copied().reduce(f64::max)
    }
}

/// Progress snapshot emitted once per generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionProgress {
    /// Zero-based generation index.
    pub generation: usize,
    /// Slowest member of the current generation.
    pub worst_candidate: String,
    /// Its measured time in seconds.
    pub worst_time: f64,
    /// Members in the current generation.
    pub population_size: usize,
    /// Candidates produced by this generation's mutation pass.
    pub pool_size: usize,
    /// Wall-clock seconds since the search started.
    pub elapsed_seconds: f64,
}

/// Outcome of the evolution loop, before amplification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Final generation. Frozen at the generation that hit the ceiling when
    /// `timed_out` is set.
    pub generation: Vec<String>,
    /// Whether any candidate reached the per-candidate ceiling.
    pub timed_out: bool,
    pub track: EvolutionTrack,
    /// Generations run.
    pub generations: usize,
    pub elapsed_seconds: f64,
    pub stop_reason: StopReason,
}

/// Reason evolution stopped. All of these are normal terminations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// A member of the generation hit the ceiling.
    CeilingHit,
    /// The wall-clock budget ran out.
    BudgetExhausted,
    /// The configured generation cap was reached.
    MaxGenerations,
    /// No non-empty candidates were left to evolve.
    EmptyPopulation,
}
