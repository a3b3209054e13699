//! Telemetry Validation Errors

use thiserror::Error;

/// Findings raised while checking a reading's plausibility
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value outside the physically plausible range for its channel
    #[error("{channel} value {value} is outside the plausible range [{min}, {max}]")]
    OutOfRange {
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Value is NaN or infinite
    #[error("{channel} value is not a finite number")]
    NotFinite { channel: &'static str },
}
