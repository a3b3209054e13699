//! Potability Classifier Boundary
//!
//! Contract for the externally trained statistical model, a crisp threshold
//! baseline, and a fail-closed gateway that degrades to rule-engine-only
//! operation when the model misbehaves.

mod gateway;
mod model;
mod threshold;

pub use gateway::{GatewayConfig, ModelGateway};
pub use model::{ClassifierError, PotabilityModel};
pub use threshold::ThresholdModel;
