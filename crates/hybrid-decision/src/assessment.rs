//! Assessment Result

use fuzzy_core::{Potability, TierStrengths};
use rule_engine::FiredRule;
use serde::{Deserialize, Serialize};

/// Complete engine output for one reading.
///
/// Entirely derived and stateless; built fresh per evaluation and handed
/// upstream for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Final tier after arbitration
    pub tier: Potability,
    /// Defuzzified quality score on [0, 100]
    pub score: f64,
    /// Trust in the tier, 0-100
    pub confidence: u8,
    /// Whether any rule fired
    pub has_active_rules: bool,
    /// Audit trail of fired rules, ascending by id
    pub fired_rules: Vec<FiredRule>,
    /// Max firing strength per tier
    pub strengths: TierStrengths,
    /// Human-readable reasoning trace
    pub explanation: Vec<String>,
}
