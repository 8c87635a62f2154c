//! Configuration types for the exploit search.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_max_len() -> usize {
    100
}
fn default_max_minutes() -> f64 {
    1.0
}
fn default_survivor_count() -> usize {
    10
}
fn default_timeout_seconds() -> f64 {
    1.0
}
fn default_print_interval() -> usize {
    10
}
fn default_steps_per_second() -> f64 {
    1_000_000.0
}
fn default_max_edits() -> usize {
    3
}

/// Top-level search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cap on the length of an amplified exploit string.
    #[serde(default = "default_max_len")]
    pub max_len: usize,
    /// Wall-clock search budget in minutes.
    #[serde(default = "default_max_minutes")]
    pub max_minutes: f64,
    /// Population cap after each cull.
    #[serde(default = "default_survivor_count")]
    pub survivor_count: usize,
    /// Per-candidate execution ceiling in seconds.
    ///
    /// Doubles as the sentinel value: a measurement equal to this means the
    /// ceiling was hit.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: f64,
    /// Generations between diagnostic progress lines.
    #[serde(default = "default_print_interval")]
    pub print_interval: usize,
    /// Matcher steps counted as one second of execution.
    #[serde(default = "default_steps_per_second")]
    pub steps_per_second: f64,
    /// Upper bound on edits per single-character mutation.
    #[serde(default = "default_max_edits")]
    pub max_edits: usize,
    /// Optional hard cap on generations.
    #[serde(default)]
    pub max_generations: Option<usize>,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
            max_minutes: default_max_minutes(),
            survivor_count: default_survivor_count(),
            timeout_seconds: default_timeout_seconds(),
            print_interval: default_print_interval(),
            steps_per_second: default_steps_per_second(),
            max_edits: default_max_edits(),
            max_generations: None,
            random_seed: None,
        }
    }
}

impl SearchConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: SearchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Wall-clock search budget.
    #[inline]
    pub fn wall_clock_budget(&self) -> Duration {
        Duration::from_secs_f64(self.max_minutes * 60.0)
    }

    /// Matcher step budget equivalent to the per-candidate ceiling.
    #[inline]
    pub fn step_budget(&self) -> u64 {
        (self.timeout_seconds * self.steps_per_second).ceil().max(1.0) as u64
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_len == 0 {
            return Err(ConfigError::InvalidMaxLen);
        }
        if self.survivor_count == 0 {
            return Err(ConfigError::InvalidSurvivorCount);
        }
        if self.max_edits == 0 {
            return Err(ConfigError::InvalidMaxEdits);
        }
        if self.print_interval == 0 {
            return Err(ConfigError::InvalidPrintInterval);
        }

        let check_positive = |value: f64, name: &'static str| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::NotPositive { name, value })
            }
        };

        check_positive(self.max_minutes, "max_minutes")?;
        check_positive(self.timeout_seconds, "timeout_seconds")?;
        check_positive(self.steps_per_second, "steps_per_second")?;

        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("max_len must be non-zero")]
    InvalidMaxLen,
    #[error("survivor_count must be non-zero")]
    InvalidSurvivorCount,
    #[error("max_edits must be non-zero")]
    InvalidMaxEdits,
    #[error("print_interval must be non-zero")]
    InvalidPrintInterval,
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.step_budget(), 1_000_000);
        assert_eq!(config.wall_clock_budget(), Duration::from_secs(60));
    }

    #[test]
    fn test_rejects_zero_survivors() {
        let config = SearchConfig {
            survivor_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSurvivorCount)
        ));
    }

    #[test]
    fn test_rejects_non_positive_timeout() {
        for timeout_seconds in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SearchConfig {
                timeout_seconds,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::NotPositive {
                    name: "timeout_seconds",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_step_budget_rounds_up() {
        let config = SearchConfig {
            timeout_seconds: 0.0015,
            steps_per_second: 1000.0,
            ..Default::default()
        };
        assert_eq!(config.step_budget(), 2);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"survivor_count": 4, "random_seed": 7}"#).unwrap();
        assert_eq!(config.survivor_count, 4);
        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.max_len, default_max_len());
        assert_eq!(config.max_generations, None);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_len": 40, "timeout_seconds": 0.5}}"#).unwrap();

        let config = SearchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_len, 40);
        assert_eq!(config.timeout_seconds, 0.5);
    }

    #[test]
    fn test_from_file_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_len": 0}}"#).unwrap();

        assert!(matches!(
            SearchConfig::from_file(file.path()),
            Err(ConfigError::InvalidMaxLen)
        ));
    }

    #[test]
    fn test_from_missing_file() {
        let result = SearchConfig::from_file("/nonexistent/redos-hunter.json");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
