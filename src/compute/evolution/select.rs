//! Survivor selection: rank a candidate pool by slowness and keep the top.

use std::collections::HashMap;

use rayon::prelude::*;

use super::fitness::MatchTimer;

/// A candidate paired with its measured time.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub candidate: String,
    /// Elapsed seconds, capped at the timer's ceiling.
    pub time: f64,
}

/// Insertion-ordered mapping from candidate content to measured time.
///
/// Content is the key: a repeated candidate collapses onto its first
/// occurrence and is measured once.
#[derive(Debug, Default)]
pub(crate) struct MeasuredPool {
    index: HashMap<String, usize>,
    entries: Vec<Measurement>,
}

impl MeasuredPool {
    /// Measure every unique non-empty candidate of `pool`.
    ///
    /// Measurements run in parallel; entries keep first-seen order.
    pub fn measure<T: MatchTimer + ?Sized>(timer: &T, pool: &[String]) -> Self {
        let mut index = HashMap::with_capacity(pool.len());
        let mut unique = Vec::with_capacity(pool.len());
        for candidate in pool {
            if candidate.is_empty() || index.contains_key(candidate) {
                continue;
            }
            index.insert(candidate.clone(), unique.len());
            unique.push(candidate);
        }

        let times: Vec<f64> = unique
            .par_iter()
            .map(|candidate| timer.match_time(candidate))
            .collect();

        let entries = unique
            .into_iter()
            .zip(times)
            .map(|(candidate, time)| Measurement {
                candidate: candidate.clone(),
                time,
            })
            .collect();

        Self { index, entries }
    }

    /// Measured time of a candidate, if it was in the pool.
    #[cfg(test)]
    fn get(&self, candidate: &str) -> Option<f64> {
        self.index.get(candidate).map(|&i| self.entries[i].time)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries sorted by time descending; ties keep first-seen order.
    pub fn into_ranked(mut self) -> Vec<Measurement> {
        self.entries.sort_by(|a, b| b.time.total_cmp(&a.time));
        self.entries
    }
}

/// Keep the `survivor_count` slowest unique, non-empty candidates of `pool`,
/// slowest first.
pub fn cull<T: MatchTimer + ?Sized>(
    timer: &T,
    pool: &[String],
    survivor_count: usize,
) -> Vec<String> {
    let measured = MeasuredPool::measure(timer, pool);
    log::trace!(
        "Measured {} unique candidates out of {}",
        measured.len(),
        pool.len()
    );

    measured
        .into_ranked()
        .into_iter()
        .take(survivor_count)
        .map(|m| m.candidate)
        .collect()
}
