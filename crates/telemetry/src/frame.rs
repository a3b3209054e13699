//! Water Reading Frame

use serde::{Deserialize, Serialize};
use std::fmt;

/// One water-quality sample from the probe array.
///
/// Immutable once captured; carries no identity beyond the triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterReading {
    /// Acidity (pH scale, nominally 0-14)
    pub ph: f64,
    /// Total dissolved solids (mg/L)
    pub tds: f64,
    /// Turbidity (NTU)
    pub turbidity: f64,
}

impl WaterReading {
    /// Create a new reading
    pub fn new(ph: f64, tds: f64, turbidity: f64) -> Self {
        Self { ph, tds, turbidity }
    }
}

impl fmt::Display for WaterReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pH {:.2}, TDS {:.1} mg/L, turbidity {:.2} NTU",
            self.ph, self.tds, self.turbidity
        )
    }
}
