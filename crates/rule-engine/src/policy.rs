//! Tier Selection Policy
//!
//! The tie-break order and the no-rule default are conventions, not
//! mandates of any water standard, so they are configuration rather than
//! constants.

use fuzzy_core::{Potability, TierStrengths};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Policy configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    /// `tie_break` must list each tier exactly once
    #[error("tie_break must be a permutation of the three tiers")]
    InvalidTieBreak,
}

/// Knobs for turning firing strengths into a tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulePolicy {
    /// Order in which tiers win ties at equal maximum strength
    pub tie_break: [Potability; 3],
    /// Tier reported when no rule fires and no arbitrator is in play
    pub no_rule_default: Potability,
}

impl Default for RulePolicy {
    fn default() -> Self {
        Self {
            tie_break: [Potability::Unsafe, Potability::Marginal, Potability::Safe],
            no_rule_default: Potability::Unsafe,
        }
    }
}

impl RulePolicy {
    /// Reject tie-break orders that skip or repeat a tier
    pub fn validate(&self) -> Result<(), PolicyError> {
        let covered = Potability::ALL
            .iter()
            .all(|t| self.tie_break.contains(t));
        if covered {
            Ok(())
        } else {
            Err(PolicyError::InvalidTieBreak)
        }
    }

    /// Tier with the highest firing strength, or `None` when nothing fired.
    ///
    /// Ties at equal nonzero maximum resolve by `tie_break` order.
    pub fn select(&self, strengths: &TierStrengths) -> Option<Potability> {
        let max = strengths.max();
        if max <= 0.0 {
            return None;
        }
        self.tie_break
            .iter()
            .copied()
            .find(|&tier| strengths.get(tier) >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strengths_of(entries: &[(Potability, f64)]) -> TierStrengths {
        let mut s = TierStrengths::new();
        for &(tier, v) in entries {
            s.note(tier, v);
        }
        s
    }

    #[test]
    fn test_select_picks_strongest_tier() {
        let policy = RulePolicy::default();
        let s = strengths_of(&[(Potability::Marginal, 0.8), (Potability::Safe, 0.3)]);
        assert_eq!(policy.select(&s), Some(Potability::Marginal));
    }

    #[test]
    fn test_select_none_when_nothing_fired() {
        assert_eq!(RulePolicy::default().select(&TierStrengths::new()), None);
    }

    #[test]
    fn test_tie_resolves_worst_first_by_default() {
        let policy = RulePolicy::default();
        let s = strengths_of(&[(Potability::Unsafe, 0.5), (Potability::Safe, 0.5)]);
        assert_eq!(policy.select(&s), Some(Potability::Unsafe));

        let s = strengths_of(&[(Potability::Marginal, 0.5), (Potability::Safe, 0.5)]);
        assert_eq!(policy.select(&s), Some(Potability::Marginal));
    }

    #[test]
    fn test_custom_tie_break_order() {
        let policy = RulePolicy {
            tie_break: [Potability::Safe, Potability::Marginal, Potability::Unsafe],
            ..Default::default()
        };
        let s = strengths_of(&[(Potability::Unsafe, 0.5), (Potability::Safe, 0.5)]);
        assert_eq!(policy.select(&s), Some(Potability::Safe));
    }

    #[test]
    fn test_validate_rejects_repeated_tier() {
        let policy = RulePolicy {
            tie_break: [Potability::Unsafe, Potability::Unsafe, Potability::Safe],
            ..Default::default()
        };
        assert_eq!(policy.validate(), Err(PolicyError::InvalidTieBreak));
    }

    #[test]
    fn test_default_policy_is_valid() {
        RulePolicy::default().validate().unwrap();
    }
}
