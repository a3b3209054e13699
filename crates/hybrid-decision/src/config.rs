//! Decision Policy Configuration
//!
//! The tie-break order, no-rule default, centroid resolution, and model
//! call budget are deployment policy, loaded from an optional file plus
//! `WATER_DECISION__*` environment overrides.

use config::{Config, Environment, File};
use rule_engine::{PolicyError, RulePolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read decision config: {0}")]
    Read(#[from] config::ConfigError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error("centroid resolution {0} is too coarse; need at least 100 samples")]
    ResolutionTooCoarse(usize),
}

/// Tunable decision policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Tier selection policy for the rule engine
    pub rule_policy: RulePolicy,
    /// Sample count for centroid defuzzification
    pub centroid_resolution: usize,
    /// Budget for one model call (ms)
    pub model_timeout_ms: u64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            rule_policy: RulePolicy::default(),
            centroid_resolution: fuzzy_core::DEFAULT_RESOLUTION,
            model_timeout_ms: 250,
        }
    }
}

impl DecisionConfig {
    /// Load from an optional file path, then environment overrides
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }
        let loaded: Self = builder
            .add_source(Environment::with_prefix("WATER_DECISION").separator("__"))
            .build()?
            .try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject inconsistent policy values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rule_policy.validate()?;
        if self.centroid_resolution < 100 {
            return Err(ConfigError::ResolutionTooCoarse(self.centroid_resolution));
        }
        Ok(())
    }
}
