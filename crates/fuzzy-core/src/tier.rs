//! Potability Tiers and Firing Strengths

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level potability verdict, ordered worst to best.
///
/// The ordering feeds the arbitrator's severity comparisons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Potability {
    /// Not fit for drinking
    Unsafe,
    /// Drinkable with reservations
    Marginal,
    /// Fit for drinking
    Safe,
}

impl Potability {
    /// All tiers, worst first
    pub const ALL: [Potability; 3] = [Potability::Unsafe, Potability::Marginal, Potability::Safe];

    /// Stable string key
    pub fn as_str(&self) -> &'static str {
        match self {
            Potability::Unsafe => "unsafe",
            Potability::Marginal => "marginal",
            Potability::Safe => "safe",
        }
    }

    fn index(self) -> usize {
        match self {
            Potability::Unsafe => 0,
            Potability::Marginal => 1,
            Potability::Safe => 2,
        }
    }
}

impl fmt::Display for Potability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-tier rule firing strengths, aggregated across rules by fuzzy OR
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierStrengths([f64; 3]);

impl TierStrengths {
    /// All-zero strengths
    pub fn new() -> Self {
        Self::default()
    }

    /// Current strength for a tier
    pub fn get(&self, tier: Potability) -> f64 {
        self.0[tier.index()]
    }

    /// Merge one rule's firing strength into its tier (max)
    pub fn note(&mut self, tier: Potability, strength: f64) {
        let slot = &mut self.0[tier.index()];
        *slot = slot.max(strength);
    }

    /// Strongest firing across all tiers
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }

    /// Iterate tiers with their strengths, worst tier first
    pub fn iter(&self) -> impl Iterator<Item = (Potability, f64)> + '_ {
        Potability::ALL.iter().map(move |&t| (t, self.get(t)))
    }
}
