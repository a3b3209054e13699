//! Linguistic Sets and Fuzzification
//!
//! The trapezoid breakpoints encode the WHO drinking-water bands. They are
//! fixed domain knowledge; do not tune them.

use crate::membership::{MembershipError, Trapezoid};
use serde::{Deserialize, Serialize};

/// Linguistic bands on the pH dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhBand {
    Acidic,
    SlightlyAcidic,
    Neutral,
    SlightlyAlkaline,
    Alkaline,
}

impl PhBand {
    /// All bands in axis order
    pub const ALL: [PhBand; 5] = [
        PhBand::Acidic,
        PhBand::SlightlyAcidic,
        PhBand::Neutral,
        PhBand::SlightlyAlkaline,
        PhBand::Alkaline,
    ];

    /// Human-readable band name
    pub fn label(&self) -> &'static str {
        match self {
            PhBand::Acidic => "acidic",
            PhBand::SlightlyAcidic => "slightly acidic",
            PhBand::Neutral => "neutral",
            PhBand::SlightlyAlkaline => "slightly alkaline",
            PhBand::Alkaline => "alkaline",
        }
    }

    fn curve(self) -> Trapezoid {
        match self {
            PhBand::Acidic => Trapezoid::new(0.0, 0.0, 6.5, 6.6),
            PhBand::SlightlyAcidic => Trapezoid::new(6.5, 6.6, 6.9, 7.0),
            PhBand::Neutral => Trapezoid::new(6.9, 7.0, 7.0, 7.1),
            PhBand::SlightlyAlkaline => Trapezoid::new(7.0, 7.1, 8.5, 8.6),
            PhBand::Alkaline => Trapezoid::new(8.5, 8.6, 14.0, 14.0),
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&b| b == self).unwrap_or(0)
    }
}

/// Quality bands shared by the TDS and turbidity dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Unacceptable,
}

impl QualityBand {
    /// All bands from best to worst
    pub const ALL: [QualityBand; 5] = [
        QualityBand::Excellent,
        QualityBand::Good,
        QualityBand::Fair,
        QualityBand::Poor,
        QualityBand::Unacceptable,
    ];

    /// Human-readable band name
    pub fn label(&self) -> &'static str {
        match self {
            QualityBand::Excellent => "excellent",
            QualityBand::Good => "good",
            QualityBand::Fair => "fair",
            QualityBand::Poor => "poor",
            QualityBand::Unacceptable => "unacceptable",
        }
    }

    fn tds_curve(self) -> Trapezoid {
        match self {
            QualityBand::Excellent => Trapezoid::new(0.0, 0.0, 300.0, 301.0),
            QualityBand::Good => Trapezoid::new(300.0, 301.0, 600.0, 601.0),
            QualityBand::Fair => Trapezoid::new(600.0, 601.0, 900.0, 901.0),
            QualityBand::Poor => Trapezoid::new(900.0, 901.0, 1199.0, 1200.0),
            QualityBand::Unacceptable => Trapezoid::new(1199.0, 1200.0, 2000.0, 2000.0),
        }
    }

    fn turbidity_curve(self) -> Trapezoid {
        match self {
            QualityBand::Excellent => Trapezoid::new(0.0, 0.0, 1.0, 1.1),
            QualityBand::Good => Trapezoid::new(1.0, 1.1, 5.0, 5.1),
            QualityBand::Fair => Trapezoid::new(5.0, 5.1, 25.0, 25.1),
            QualityBand::Poor => Trapezoid::new(25.0, 25.1, 100.0, 100.1),
            QualityBand::Unacceptable => Trapezoid::new(100.0, 100.1, 300.0, 300.0),
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&b| b == self).unwrap_or(0)
    }
}

/// Membership degrees of one pH value across the five pH bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhVector {
    degrees: [f64; 5],
}

impl PhVector {
    /// Degree of membership in one band
    pub fn degree(&self, band: PhBand) -> f64 {
        self.degrees[band.index()]
    }

    /// Iterate bands with their degrees
    pub fn iter(&self) -> impl Iterator<Item = (PhBand, f64)> + '_ {
        PhBand::ALL.iter().map(move |&b| (b, self.degree(b)))
    }

    /// Bands with nonzero degree, for the explanation trace
    pub fn significant(&self) -> impl Iterator<Item = (PhBand, f64)> + '_ {
        self.iter().filter(|&(_, d)| d > 0.0)
    }
}

/// Membership degrees across the five quality bands of TDS or turbidity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandVector {
    degrees: [f64; 5],
}

impl BandVector {
    /// Degree of membership in one band
    pub fn degree(&self, band: QualityBand) -> f64 {
        self.degrees[band.index()]
    }

    /// Iterate bands with their degrees
    pub fn iter(&self) -> impl Iterator<Item = (QualityBand, f64)> + '_ {
        QualityBand::ALL.iter().map(move |&b| (b, self.degree(b)))
    }

    /// Bands with nonzero degree, for the explanation trace
    pub fn significant(&self) -> impl Iterator<Item = (QualityBand, f64)> + '_ {
        self.iter().filter(|&(_, d)| d > 0.0)
    }
}

/// Fuzzify a pH value
pub fn fuzzify_ph(ph: f64) -> PhVector {
    let mut degrees = [0.0; 5];
    for (i, band) in PhBand::ALL.iter().enumerate() {
        degrees[i] = band.curve().membership(ph);
    }
    PhVector { degrees }
}

/// Fuzzify a TDS value (mg/L)
pub fn fuzzify_tds(tds: f64) -> BandVector {
    let mut degrees = [0.0; 5];
    for (i, band) in QualityBand::ALL.iter().enumerate() {
        degrees[i] = band.tds_curve().membership(tds);
    }
    BandVector { degrees }
}

/// Fuzzify a turbidity value (NTU)
pub fn fuzzify_turbidity(ntu: f64) -> BandVector {
    let mut degrees = [0.0; 5];
    for (i, band) in QualityBand::ALL.iter().enumerate() {
        degrees[i] = band.turbidity_curve().membership(ntu);
    }
    BandVector { degrees }
}

/// Validate every static table.
///
/// Malformed breakpoints are a programming error; call this once at process
/// start so they surface before the first evaluation.
pub fn verify_tables() -> Result<(), MembershipError> {
    for band in PhBand::ALL {
        band.curve().validate(band.label())?;
    }
    for band in QualityBand::ALL {
        band.tds_curve().validate(band.label())?;
        band.turbidity_curve().validate(band.label())?;
    }
    Ok(())
}
