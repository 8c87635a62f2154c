//! Evolution loop: mutate, evaluate and cull until a candidate hits the
//! ceiling or the wall-clock budget runs out.

use std::time::Instant;

use crate::schema::{EvolutionProgress, EvolutionResult, EvolutionTrack, SearchConfig, StopReason};

use super::fitness::MatchTimer;
use super::mutation::{CandidateRng, printable_alphabet};
use super::pump::pump;
use super::select::{Measurement, cull};

/// Evolution engine that runs the search against one timer.
pub struct EvolutionEngine<'a, T: MatchTimer + ?Sized> {
    config: SearchConfig,
    timer: &'a T,
    rng: CandidateRng,
    alphabet: Vec<char>,
}

impl<'a, T: MatchTimer + ?Sized> EvolutionEngine<'a, T> {
    /// Create a new evolution engine.
    ///
    /// Mutation is driven by `config.random_seed`, or by a fresh seed that is
    /// logged so the run can be replayed.
    pub fn new(config: SearchConfig, timer: &'a T) -> Self {
        let seed = config.random_seed.unwrap_or_else(|| {
            let seed = rand::random();
            log::info!("No random seed configured, using {seed}");
            seed
        });

        Self {
            config,
            timer,
            rng: CandidateRng::new(seed),
            alphabet: printable_alphabet(),
        }
    }

    /// Restrict mutations to a custom alphabet.
    pub fn with_alphabet(mut self, alphabet: Vec<char>) -> Self {
        if !alphabet.is_empty() {
            self.alphabet = alphabet;
        }
        self
    }

    /// Build the scratch pool for one generation.
    ///
    /// Each adjacent pair contributes a single-character mutation, both
    /// crossover children and a multi-character mutation of the first
    /// member. The current generation follows, then one extra mutation of
    /// each kind for the last member, which has no successor.
    fn mutate(&mut self, generation: &[String]) -> Vec<String> {
        let mut pool = Vec::with_capacity(generation.len() * 5 + 2);

        for pair in generation.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            let single = self
                .rng
                .single_char_mutate(current, &self.alphabet, self.config.max_edits);
            let (cross_a, cross_b) = self.rng.crossover(current, next);
            let multi = self.rng.multi_mutate(current, &self.alphabet);

            pool.push(single);
            pool.push(cross_a);
            pool.push(cross_b);
            pool.push(multi);
        }

        pool.extend_from_slice(generation);

        if let Some(last) = generation.last() {
            pool.push(self.rng.multi_mutate(last, &self.alphabet));
            pool.push(
                self.rng
                    .single_char_mutate(last, &self.alphabet, self.config.max_edits),
            );
        }

        pool
    }

    /// Whether evolution should stop before starting generation `index`.
    fn should_stop(&self, generation: &[String], index: usize, start: Instant) -> Option<StopReason> {
        if generation.is_empty() {
            if index == 0 {
                log::warn!("Seed population is empty");
            }
            return Some(StopReason::EmptyPopulation);
        }

        if start.elapsed() >= self.config.wall_clock_budget() {
            return Some(StopReason::BudgetExhausted);
        }

        if let Some(limit) = self.config.max_generations
            && index >= limit
        {
            return Some(StopReason::MaxGenerations);
        }

        None
    }

    /// Run evolution from `seeds` with a per-generation progress callback.
    pub fn run_with_callback<F>(&mut self, seeds: Vec<String>, mut callback: F) -> EvolutionResult
    where
        F: FnMut(&EvolutionProgress),
    {
        let start = Instant::now();
        let ceiling = self.timer.ceiling();

        let mut generation = seeds;
        let mut track = EvolutionTrack::default();
        let mut timed_out = false;
        let mut index = 0;

        let stop_reason = loop {
            if let Some(reason) = self.should_stop(&generation, index, start) {
                break reason;
            }

            let pool = self.mutate(&generation);

            // Worst case of the current generation, not of the pool
            let Some((worst_candidate, worst_time)) =
                self.timer.slowest_total_match_time(&generation)
            else {
                break StopReason::EmptyPopulation;
            };
            track.push(worst_time);

            // Measurements are capped, so reaching the ceiling means equality
            // with the sentinel.
            if worst_time >= ceiling {
                timed_out = true;
            }

            let progress = EvolutionProgress {
                generation: index,
                worst_candidate,
                worst_time,
                population_size: generation.len(),
                pool_size: pool.len(),
                elapsed_seconds: start.elapsed().as_secs_f64(),
            };
            log::debug!(
                "Generation {}: worst {:.6}s over {} members, pool {}",
                progress.generation,
                progress.worst_time,
                progress.population_size,
                progress.pool_size
            );
            callback(&progress);

            index += 1;

            if timed_out {
                // Keep the generation that produced the hit; the pool is unverified
                break StopReason::CeilingHit;
            }

            generation = cull(self.timer, &pool, self.config.survivor_count);
            if generation.is_empty() {
                log::warn!("Cull left no non-empty candidates");
            }
        };

        let elapsed_seconds = start.elapsed().as_secs_f64();
        log::info!(
            "Evolution stopped after {} generations in {:.2}s: {:?}",
            index,
            elapsed_seconds,
            stop_reason
        );

        EvolutionResult {
            generation,
            timed_out,
            track,
            generations: index,
            elapsed_seconds,
            stop_reason,
        }
    }

    /// Run evolution (blocking).
    pub fn run(&mut self, seeds: Vec<String>) -> EvolutionResult {
        self.run_with_callback(seeds, |_| {})
    }

    /// Final pass: pump each member of the final generation (only when the
    /// loop did not hit the ceiling and the member is shorter than
    /// `max_len`), then measure it afresh.
    pub fn amplify(&self, result: &EvolutionResult) -> Vec<Measurement> {
        result
            .generation
            .iter()
            .map(|candidate| {
                let pumpable =
                    !result.timed_out && candidate.chars().count() < self.config.max_len;
                let candidate = if pumpable {
                    pump(self.timer, candidate, self.config.max_len)
                } else {
                    candidate.clone()
                };
                let time = self.timer.match_time(&candidate);
                Measurement { candidate, time }
            })
            .collect()
    }
}
