//! Notification Gating
//!
//! Continuous sampling re-derives the same verdict every cycle; this gate
//! keeps the operator channel from repeating itself while never muting a
//! fresh unsafe verdict on confidence grounds.

use config::{Config, Environment, File};
use fuzzy_core::Potability;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Advisory configuration loading errors
#[derive(Debug, Error)]
pub enum AdvisoryConfigError {
    #[error("failed to read advisory config: {0}")]
    Read(#[from] config::ConfigError),
}

/// Severity attached to an outgoing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Notification gate configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    /// Cooldown between repeat notifications for the same tier (seconds)
    pub cooldown_seconds: u64,
    /// Maximum notifications per hour before throttling
    pub max_per_hour: usize,
    /// Minimum confidence for non-critical notifications
    pub min_confidence: u8,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: 1800,
            max_per_hour: 10,
            min_confidence: 40,
        }
    }
}

impl AdvisoryConfig {
    /// Load from an optional file path, then `WATER_ADVISORY__*` overrides
    pub fn load(path: Option<&str>) -> Result<Self, AdvisoryConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }
        let loaded = builder
            .add_source(Environment::with_prefix("WATER_ADVISORY").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(loaded)
    }
}

/// Gate for repeat notifications
pub struct AdvisoryManager {
    config: AdvisoryConfig,
    last_sent: HashMap<Potability, Instant>,
    hourly_count: usize,
    hour_start: Instant,
}

impl AdvisoryManager {
    /// Create a gate with the given configuration
    pub fn new(config: AdvisoryConfig) -> Self {
        info!("creating advisory manager with config: {:?}", config);
        Self {
            config,
            last_sent: HashMap::new(),
            hourly_count: 0,
            hour_start: Instant::now(),
        }
    }

    /// Whether this verdict should reach the operator.
    ///
    /// Unsafe verdicts carry confidence 0 by design and are never
    /// confidence-gated; they also bypass the hourly throttle.
    pub fn should_notify(&mut self, tier: Potability, confidence: u8) -> bool {
        let critical = tier == Potability::Unsafe;

        if !critical && confidence < self.config.min_confidence {
            debug!(
                "notification suppressed: confidence {} < threshold {}",
                confidence, self.config.min_confidence
            );
            return false;
        }

        if self.hour_start.elapsed() > Duration::from_secs(3600) {
            self.hourly_count = 0;
            self.hour_start = Instant::now();
        }

        if !critical && self.hourly_count >= self.config.max_per_hour {
            warn!("notification throttled: hourly budget exhausted");
            return false;
        }

        if let Some(sent) = self.last_sent.get(&tier) {
            let cooldown = Duration::from_secs(self.config.cooldown_seconds);
            if sent.elapsed() < cooldown {
                debug!(%tier, "notification suppressed: in cooldown");
                return false;
            }
        }

        true
    }

    /// Record that a notification went out
    pub fn record_sent(&mut self, tier: Potability) {
        self.hourly_count += 1;
        self.last_sent.insert(tier, Instant::now());
        info!(%tier, "notification recorded");
    }

    /// Severity for a verdict
    pub fn severity(&self, tier: Potability) -> Severity {
        match tier {
            Potability::Unsafe => Severity::Critical,
            Potability::Marginal => Severity::Warning,
            Potability::Safe => Severity::Info,
        }
    }

    /// Notifications sent in the current hour window
    pub fn hourly_count(&self) -> usize {
        self.hourly_count
    }

    /// Forget all gating state
    pub fn clear(&mut self) {
        self.last_sent.clear();
        self.hourly_count = 0;
    }
}

impl Default for AdvisoryManager {
    fn default() -> Self {
        Self::new(AdvisoryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_confidence_marginal_is_suppressed() {
        let mut manager = AdvisoryManager::default();
        assert!(!manager.should_notify(Potability::Marginal, 20));
        assert!(manager.should_notify(Potability::Marginal, 50));
    }

    #[test]
    fn test_unsafe_is_never_confidence_gated() {
        let mut manager = AdvisoryManager::default();
        assert!(manager.should_notify(Potability::Unsafe, 0));
    }

    #[test]
    fn test_cooldown_suppresses_repeats() {
        let mut manager = AdvisoryManager::new(AdvisoryConfig {
            cooldown_seconds: 60,
            ..Default::default()
        });
        assert!(manager.should_notify(Potability::Unsafe, 0));
        manager.record_sent(Potability::Unsafe);
        assert!(!manager.should_notify(Potability::Unsafe, 0));
        // A different tier is not in cooldown
        assert!(manager.should_notify(Potability::Marginal, 50));
    }

    #[test]
    fn test_hourly_throttle_spares_unsafe() {
        let mut manager = AdvisoryManager::new(AdvisoryConfig {
            cooldown_seconds: 0,
            max_per_hour: 1,
            min_confidence: 0,
        });
        manager.record_sent(Potability::Safe);
        assert!(!manager.should_notify(Potability::Marginal, 80));
        assert!(manager.should_notify(Potability::Unsafe, 0));
    }

    #[test]
    fn test_severity_mapping() {
        let manager = AdvisoryManager::default();
        assert_eq!(manager.severity(Potability::Unsafe), Severity::Critical);
        assert_eq!(manager.severity(Potability::Marginal), Severity::Warning);
        assert_eq!(manager.severity(Potability::Safe), Severity::Info);
    }

    #[test]
    fn test_load_without_file_yields_defaults() {
        let cfg = AdvisoryConfig::load(None).unwrap();
        assert_eq!(cfg, AdvisoryConfig::default());
    }

    #[test]
    fn test_clear_resets_state() {
        let mut manager = AdvisoryManager::new(AdvisoryConfig {
            cooldown_seconds: 3600,
            ..Default::default()
        });
        manager.record_sent(Potability::Unsafe);
        manager.clear();
        assert_eq!(manager.hourly_count(), 0);
        assert!(manager.should_notify(Potability::Unsafe, 0));
    }
}
