//! Crisp Threshold Baseline
//!
//! Band-threshold stand-in for the trained model, used by tests and the
//! demo binary. Real deployments load an externally trained classifier
//! behind the same trait.

use crate::model::{ClassifierError, PotabilityModel};
use fuzzy_core::Potability;
use tracing::debug;

/// Crisp classifier over the drinking-water bands
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdModel;

impl ThresholdModel {
    /// Create a baseline model
    pub fn new() -> Self {
        Self
    }

    fn classify(&self, ph: f64, tds: f64, turbidity: f64) -> Potability {
        let danger = ph <= 6.5 || ph >= 8.6 || tds > 900.0 || turbidity > 25.0;
        if danger {
            return Potability::Unsafe;
        }

        let ideal = (6.9..=7.1).contains(&ph) && tds <= 300.0 && turbidity <= 1.0;
        if ideal {
            Potability::Safe
        } else {
            Potability::Marginal
        }
    }
}

impl PotabilityModel for ThresholdModel {
    async fn predict(
        &self,
        ph: f64,
        tds: f64,
        turbidity: f64,
    ) -> Result<Potability, ClassifierError> {
        let tier = self.classify(ph, tds, turbidity);
        debug!(%tier, "threshold model prediction");
        Ok(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ideal_water_is_safe() {
        let model = ThresholdModel::new();
        let tier = model.predict(7.0, 150.0, 0.5).await.unwrap();
        assert_eq!(tier, Potability::Safe);
    }

    #[tokio::test]
    async fn test_acidic_water_is_unsafe() {
        let model = ThresholdModel::new();
        let tier = model.predict(5.5, 150.0, 0.5).await.unwrap();
        assert_eq!(tier, Potability::Unsafe);
    }

    #[tokio::test]
    async fn test_middling_water_is_marginal() {
        let model = ThresholdModel::new();
        let tier = model.predict(7.8, 450.0, 3.0).await.unwrap();
        assert_eq!(tier, Potability::Marginal);
    }

    #[tokio::test]
    async fn test_tolerates_wild_inputs() {
        let model = ThresholdModel::new();
        // NaN pH comparisons read false; the absurd turbidity still trips
        // the danger arm
        let tier = model.predict(f64::NAN, -50.0, 1e9).await.unwrap();
        assert_eq!(tier, Potability::Unsafe);
    }
}
