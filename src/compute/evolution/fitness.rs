//! Timing harness: measures how slow a candidate input is for a pattern.
//!
//! Time is measured in matcher steps and converted to seconds, so every
//! measurement is deterministic and can never exceed the ceiling.

use crate::compute::backtrack::{CompileError, Program};
use crate::schema::SearchConfig;

/// Measures candidate inputs against a single pattern.
///
/// Implementations must guarantee that `match_time` never returns a value
/// above `ceiling()`, and that hitting the ceiling returns it exactly.
pub trait MatchTimer: Sync {
    /// Per-candidate ceiling in seconds (the timeout sentinel).
    fn ceiling(&self) -> f64;

    /// Elapsed seconds for one match attempt, capped at the ceiling.
    fn match_time(&self, candidate: &str) -> f64;

    /// Slowest member of a generation. The first maximum wins; `None` for an
    /// empty generation.
    fn slowest_total_match_time(&self, generation: &[String]) -> Option<(String, f64)> {
        let mut slowest: Option<(&String, f64)> = None;
        for candidate in generation {
            let time = self.match_time(candidate);
            if slowest.is_none_or(|(_, best)| time > best) {
                slowest = Some((candidate, time));
            }
        }
        slowest.map(|(candidate, time)| (candidate.clone(), time))
    }
}

/// Errors raised while building a timer.
#[derive(Debug, thiserror::Error)]
pub enum TimingError {
    #[error("Pattern cannot be timed: {0}")]
    Compile(#[from] CompileError),
}

/// Step-counting timer backed by the bounded backtracking matcher.
#[derive(Debug, Clone)]
pub struct BacktrackTimer {
    program: Program,
    step_budget: u64,
    steps_per_second: f64,
    timeout_seconds: f64,
}

impl BacktrackTimer {
    /// Compile `pattern` with the ceiling and step rate from `config`.
    pub fn new(pattern: &str, config: &SearchConfig) -> Result<Self, TimingError> {
        let program = Program::compile(pattern)?;
        log::debug!(
            "Compiled {:?} to {} instructions, step budget {}",
            pattern,
            program.len(),
            config.step_budget()
        );

        Ok(Self {
            program,
            step_budget: config.step_budget(),
            steps_per_second: config.steps_per_second,
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// Raw step count for one match attempt, capped at the step budget.
    fn match_steps(&self, candidate: &str) -> u64 {
        self.program
            .search(candidate, self.step_budget)
            .steps(self.step_budget)
    }
}

impl MatchTimer for BacktrackTimer {
    fn ceiling(&self) -> f64 {
        self.timeout_seconds
    }

    fn match_time(&self, candidate: &str) -> f64 {
        let steps = self.match_steps(candidate);
        if steps >= self.step_budget {
            return self.timeout_seconds;
        }
        (steps as f64 / self.steps_per_second).min(self.timeout_seconds)
    }
}
