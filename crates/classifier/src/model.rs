//! External Model Contract

use fuzzy_core::Potability;
use thiserror::Error;

/// Errors surfaced by a model implementation
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("model load failed: {0}")]
    LoadFailed(String),
    #[error("prediction failed: {0}")]
    PredictionFailed(String),
    #[error("prediction timeout after {0}ms")]
    Timeout(u64),
}

/// Contract for the externally trained potability model.
///
/// Implementations must tolerate any numeric input; range enforcement is
/// not part of the contract. Failures are expected and handled by the
/// gateway, never by the fuzzy core.
#[allow(async_fn_in_trait)]
pub trait PotabilityModel {
    /// Classify one reading into a potability tier
    async fn predict(&self, ph: f64, tds: f64, turbidity: f64)
        -> Result<Potability, ClassifierError>;
}
