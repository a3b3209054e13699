//! Fail-Closed Model Gateway
//!
//! Any model failure reads as "classifier absent": the pipeline continues
//! in standalone rule-engine mode instead of crashing or blocking.

use crate::model::PotabilityModel;
use fuzzy_core::Potability;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Budget for one model call (ms)
    pub timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { timeout_ms: 250 }
    }
}

/// Wraps a model so the caller only ever sees `Option<Potability>`
pub struct ModelGateway<M> {
    model: M,
    config: GatewayConfig,
}

impl<M: PotabilityModel> ModelGateway<M> {
    /// Wrap a model with the default call budget
    pub fn new(model: M) -> Self {
        Self::with_config(model, GatewayConfig::default())
    }

    /// Wrap a model with an explicit call budget
    pub fn with_config(model: M, config: GatewayConfig) -> Self {
        Self { model, config }
    }

    /// Ask the model for a tier; `None` means "classifier unavailable"
    pub async fn predict(&self, ph: f64, tds: f64, turbidity: f64) -> Option<Potability> {
        let budget = Duration::from_millis(self.config.timeout_ms);
        match timeout(budget, self.model.predict(ph, tds, turbidity)).await {
            Ok(Ok(tier)) => {
                debug!(%tier, "model verdict");
                Some(tier)
            }
            Ok(Err(err)) => {
                warn!("model prediction failed, continuing without classifier: {err}");
                None
            }
            Err(_) => {
                warn!(
                    "model prediction exceeded {}ms, continuing without classifier",
                    self.config.timeout_ms
                );
                None
            }
        }
    }
}
