//! Centroid Defuzzification
//!
//! Aggregates the clipped output sets on the 0-100 score axis and takes the
//! discretized centroid.

use crate::membership::Trapezoid;
use crate::tier::{Potability, TierStrengths};
use tracing::debug;

/// Sample count on the score axis; 1000 keeps the centroid within 0.1 of
/// the closed form
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Output fuzzy sets on the score axis, one per tier
const OUTPUT_SETS: [(Potability, Trapezoid); 3] = [
    (Potability::Unsafe, Trapezoid::new(0.0, 0.0, 40.0, 50.0)),
    (Potability::Marginal, Trapezoid::new(40.0, 50.0, 70.0, 80.0)),
    (Potability::Safe, Trapezoid::new(70.0, 80.0, 100.0, 100.0)),
];

/// Defuzzify at the default resolution
pub fn defuzzify(strengths: &TierStrengths) -> f64 {
    defuzzify_at(strengths, DEFAULT_RESOLUTION)
}

/// Centroid of the aggregated output sets, sampled at `resolution` evenly
/// spaced points on [0, 100] (endpoints included).
///
/// Each output set is clipped at its tier's firing strength; the aggregate
/// at a point is the max over clipped sets. Returns the neutral 50.0 when
/// the aggregate is zero everywhere.
pub fn defuzzify_at(strengths: &TierStrengths, resolution: usize) -> f64 {
    let steps = resolution.max(2);
    let dx = 100.0 / (steps - 1) as f64;

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for i in 0..steps {
        let x = i as f64 * dx;
        let mut aggregate: f64 = 0.0;
        for (tier, curve) in OUTPUT_SETS {
            let strength = strengths.get(tier);
            if strength > 0.0 {
                aggregate = aggregate.max(strength.min(curve.membership(x)));
            }
        }
        numerator += x * aggregate;
        denominator += aggregate;
    }

    if denominator == 0.0 {
        debug!("empty aggregate membership, returning neutral score");
        return 50.0;
    }
    numerator / denominator
}
