//! Reading Plausibility Checks
//!
//! Out-of-range values are flagged, never rejected: the fuzzy engine
//! degrades gracefully on implausible inputs, so the pipeline proceeds and
//! the findings travel with the reading for the operator.

use crate::error::ValidationError;
use crate::frame::WaterReading;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Physically plausible ranges per channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlausibilityConfig {
    /// pH plausible range
    pub ph_range: (f64, f64),
    /// TDS plausible range (mg/L)
    pub tds_range: (f64, f64),
    /// Turbidity plausible range (NTU)
    pub turbidity_range: (f64, f64),
}

impl Default for PlausibilityConfig {
    fn default() -> Self {
        Self {
            ph_range: (0.0, 14.0),
            tds_range: (0.0, 2000.0),
            turbidity_range: (0.0, 300.0),
        }
    }
}

/// Outcome of a plausibility check
#[derive(Debug, Clone, Default)]
pub struct PlausibilityReport {
    /// Findings, one per suspect channel
    pub findings: Vec<ValidationError>,
}

impl PlausibilityReport {
    /// Whether every channel looked physically plausible
    pub fn is_plausible(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Plausibility checker for water readings
pub struct ReadingValidator {
    config: PlausibilityConfig,
}

impl ReadingValidator {
    /// Create a validator with the given channel ranges
    pub fn new(config: PlausibilityConfig) -> Self {
        Self { config }
    }

    /// Check one reading, logging each finding at warn level
    pub fn check(&self, reading: &WaterReading) -> PlausibilityReport {
        let mut report = PlausibilityReport::default();

        self.check_channel("ph", reading.ph, self.config.ph_range, &mut report);
        self.check_channel("tds", reading.tds, self.config.tds_range, &mut report);
        self.check_channel(
            "turbidity",
            reading.turbidity,
            self.config.turbidity_range,
            &mut report,
        );

        for finding in &report.findings {
            warn!("suspect reading: {finding}");
        }
        report
    }

    fn check_channel(
        &self,
        channel: &'static str,
        value: f64,
        range: (f64, f64),
        report: &mut PlausibilityReport,
    ) {
        if !value.is_finite() {
            report.findings.push(ValidationError::NotFinite { channel });
        } else if value < range.0 || value > range.1 {
            report.findings.push(ValidationError::OutOfRange {
                channel,
                value,
                min: range.0,
                max: range.1,
            });
        }
    }
}

impl Default for ReadingValidator {
    fn default() -> Self {
        Self::new(PlausibilityConfig::default())
    }
}
