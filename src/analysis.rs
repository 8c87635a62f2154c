//! End-to-end analysis: screen, evolve, amplify, report.

use crate::compute::evolution::{
    BacktrackTimer, EvolutionEngine, MatchTimer, build_output, no_potential, unsupported,
    vulnerable_tokens_present,
};
use crate::schema::wire::{self, Output, WireError};
use crate::schema::{
    ConfigError, EvolutionProgress, EvolutionResult, Pattern, SearchConfig, generate_seeds,
};

/// How the entry point reads input and renders output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Input is a `Root` envelope; output is base64 protobuf.
    #[default]
    Production,
    /// Input is a bare `Expression`; output is rendered readably along with
    /// the evolutionary track.
    Diagnostic,
}

/// Errors that stop an analysis before any search begins.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Malformed input: {0}")]
    Wire(#[from] WireError),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Output of one analysis, plus the search details when a search ran.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub output: Output,
    /// `None` when no search ran.
    pub evolution: Option<EvolutionResult>,
}

/// Decode an encoded payload according to the run mode.
pub fn decode_input(encoded: &str, mode: RunMode) -> Result<Pattern, AnalysisError> {
    let expression = match mode {
        RunMode::Production => wire::decode_root(encoded)?,
        RunMode::Diagnostic => wire::decode_expression(encoded)?,
    };
    Ok(Pattern::try_from(expression)?)
}

/// Analyze a pattern with seeds generated from its token stream.
pub fn evaluate_expression(
    pattern: &Pattern,
    config: &SearchConfig,
) -> Result<Analysis, AnalysisError> {
    evaluate_expression_with_progress(pattern, config, |_| {})
}

/// Like [`evaluate_expression`], reporting every generation to `on_progress`.
///
/// A pattern the matcher cannot compile is not an error: it yields the
/// unsupported output with score 0.
pub fn evaluate_expression_with_progress<F>(
    pattern: &Pattern,
    config: &SearchConfig,
    on_progress: F,
) -> Result<Analysis, AnalysisError>
where
    F: FnMut(&EvolutionProgress),
{
    config.validate()?;

    if !vulnerable_tokens_present(pattern.tokens()) {
        log::info!("No risk-bearing tokens in {:?}, skipping search", pattern.raw);
        return Ok(Analysis {
            output: no_potential(),
            evolution: None,
        });
    }

    let timer = match BacktrackTimer::new(&pattern.raw, config) {
        Ok(timer) => timer,
        Err(err) => {
            log::warn!("Cannot time {:?}: {}", pattern.raw, err);
            return Ok(Analysis {
                output: unsupported(),
                evolution: None,
            });
        }
    };

    let seeds = generate_seeds(pattern.tokens());
    Ok(evaluate_with_timer(pattern, seeds, config, &timer, on_progress))
}

/// Analyze a pattern from explicit seeds and an explicit timer.
///
/// Configuration is assumed valid.
pub fn evaluate_with_timer<T, F>(
    pattern: &Pattern,
    seeds: Vec<String>,
    config: &SearchConfig,
    timer: &T,
    on_progress: F,
) -> Analysis
where
    T: MatchTimer + ?Sized,
    F: FnMut(&EvolutionProgress),
{
    if !vulnerable_tokens_present(pattern.tokens()) {
        return Analysis {
            output: no_potential(),
            evolution: None,
        };
    }

    log::info!(
        "Searching {:?}: {} seeds, {} survivors, ceiling {}s, budget {} min",
        pattern.raw,
        seeds.len(),
        config.survivor_count,
        config.timeout_seconds,
        config.max_minutes
    );
    log::debug!("Tokens = {:?}", pattern.tokens());

    let mut engine = EvolutionEngine::new(config.clone(), timer);
    let result = engine.run_with_callback(seeds, on_progress);

    let finals = engine.amplify(&result);
    let output = build_output(&finals, result.timed_out, timer.ceiling());

    Analysis {
        output,
        evolution: Some(result),
    }
}

/// Render an analysis for stdout according to the run mode.
pub fn render(analysis: &Analysis, mode: RunMode) -> String {
    match mode {
        RunMode::Production => wire::encode_output(&analysis.output),
        RunMode::Diagnostic => {
            let mut rendered = format!("{:#?}", analysis.output);
            if let Some(result) = &analysis.evolution {
                let track = serde_json::to_string(&result.track.worst_times)
                    .unwrap_or_else(|_| "[]".to_string());
                rendered.push_str(&format!("\nEvolutionary track: {track}"));
            }
            rendered
        }
    }
}
