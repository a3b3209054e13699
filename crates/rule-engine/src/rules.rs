//! Static Potability Rule Base
//!
//! Twenty-two rules of fixed domain knowledge: six single-term danger
//! alarms, ten marginal combinations, six safe combinations. Ids are stable
//! across runs and the table is evaluated in ascending id order.

use fuzzy_core::{PhBand, Potability, QualityBand};

/// One antecedent term: a linguistic band on a single dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Ph(PhBand),
    Tds(QualityBand),
    Turbidity(QualityBand),
}

/// Immutable inference rule: terms ANDed together implying a tier
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable rule id
    pub id: u8,
    /// Tier this rule argues for
    pub tier: Potability,
    /// 1-3 antecedent terms, combined by min
    pub terms: &'static [Term],
    /// Condition summary for the audit trail
    pub summary: &'static str,
}

/// Rules with id at or below this are single-term danger alarms
pub const DANGER_RULE_MAX_ID: u8 = 6;

/// The full rule base, ascending by id
pub static RULES: [Rule; 22] = [
    // Danger alarms: any one band alone condemns the water
    Rule {
        id: 1,
        tier: Potability::Unsafe,
        terms: &[Term::Ph(PhBand::Acidic)],
        summary: "acidic pH",
    },
    Rule {
        id: 2,
        tier: Potability::Unsafe,
        terms: &[Term::Ph(PhBand::Alkaline)],
        summary: "alkaline pH",
    },
    Rule {
        id: 3,
        tier: Potability::Unsafe,
        terms: &[Term::Tds(QualityBand::Poor)],
        summary: "poor TDS",
    },
    Rule {
        id: 4,
        tier: Potability::Unsafe,
        terms: &[Term::Tds(QualityBand::Unacceptable)],
        summary: "unacceptable TDS",
    },
    Rule {
        id: 5,
        tier: Potability::Unsafe,
        terms: &[Term::Turbidity(QualityBand::Poor)],
        summary: "poor turbidity",
    },
    Rule {
        id: 6,
        tier: Potability::Unsafe,
        terms: &[Term::Turbidity(QualityBand::Unacceptable)],
        summary: "unacceptable turbidity",
    },
    // Marginal combinations
    Rule {
        id: 7,
        tier: Potability::Marginal,
        terms: &[
            Term::Ph(PhBand::SlightlyAcidic),
            Term::Tds(QualityBand::Fair),
            Term::Turbidity(QualityBand::Fair),
        ],
        summary: "slightly acidic pH, fair TDS, fair turbidity",
    },
    Rule {
        id: 8,
        tier: Potability::Marginal,
        terms: &[
            Term::Ph(PhBand::SlightlyAlkaline),
            Term::Tds(QualityBand::Fair),
            Term::Turbidity(QualityBand::Fair),
        ],
        summary: "slightly alkaline pH, fair TDS, fair turbidity",
    },
    Rule {
        id: 9,
        tier: Potability::Marginal,
        terms: &[
            Term::Ph(PhBand::Neutral),
            Term::Tds(QualityBand::Fair),
            Term::Turbidity(QualityBand::Good),
        ],
        summary: "neutral pH, fair TDS, good turbidity",
    },
    Rule {
        id: 10,
        tier: Potability::Marginal,
        terms: &[
            Term::Ph(PhBand::Neutral),
            Term::Tds(QualityBand::Good),
            Term::Turbidity(QualityBand::Fair),
        ],
        summary: "neutral pH, good TDS, fair turbidity",
    },
    Rule {
        id: 11,
        tier: Potability::Marginal,
        terms: &[
            Term::Ph(PhBand::SlightlyAcidic),
            Term::Tds(QualityBand::Good),
            Term::Turbidity(QualityBand::Good),
        ],
        summary: "slightly acidic pH, good TDS, good turbidity",
    },
    Rule {
        id: 12,
        tier: Potability::Marginal,
        terms: &[
            Term::Ph(PhBand::SlightlyAlkaline),
            Term::Tds(QualityBand::Good),
            Term::Turbidity(QualityBand::Good),
        ],
        summary: "slightly alkaline pH, good TDS, good turbidity",
    },
    Rule {
        id: 13,
        tier: Potability::Marginal,
        terms: &[
            Term::Ph(PhBand::SlightlyAcidic),
            Term::Tds(QualityBand::Good),
            Term::Turbidity(QualityBand::Excellent),
        ],
        summary: "slightly acidic pH, good TDS, excellent turbidity",
    },
    Rule {
        id: 14,
        tier: Potability::Marginal,
        terms: &[
            Term::Ph(PhBand::SlightlyAlkaline),
            Term::Tds(QualityBand::Good),
            Term::Turbidity(QualityBand::Excellent),
        ],
        summary: "slightly alkaline pH, good TDS, excellent turbidity",
    },
    Rule {
        id: 15,
        tier: Potability::Marginal,
        terms: &[
            Term::Ph(PhBand::SlightlyAcidic),
            Term::Tds(QualityBand::Excellent),
            Term::Turbidity(QualityBand::Good),
        ],
        summary: "slightly acidic pH, excellent TDS, good turbidity",
    },
    Rule {
        id: 16,
        tier: Potability::Marginal,
        terms: &[
            Term::Ph(PhBand::SlightlyAlkaline),
            Term::Tds(QualityBand::Excellent),
            Term::Turbidity(QualityBand::Good),
        ],
        summary: "slightly alkaline pH, excellent TDS, good turbidity",
    },
    // Safe combinations
    Rule {
        id: 17,
        tier: Potability::Safe,
        terms: &[
            Term::Ph(PhBand::SlightlyAcidic),
            Term::Tds(QualityBand::Excellent),
            Term::Turbidity(QualityBand::Excellent),
        ],
        summary: "slightly acidic pH, excellent TDS, excellent turbidity",
    },
    Rule {
        id: 18,
        tier: Potability::Safe,
        terms: &[
            Term::Ph(PhBand::SlightlyAlkaline),
            Term::Tds(QualityBand::Excellent),
            Term::Turbidity(QualityBand::Excellent),
        ],
        summary: "slightly alkaline pH, excellent TDS, excellent turbidity",
    },
    Rule {
        id: 19,
        tier: Potability::Safe,
        terms: &[
            Term::Ph(PhBand::Neutral),
            Term::Tds(QualityBand::Excellent),
            Term::Turbidity(QualityBand::Excellent),
        ],
        summary: "neutral pH, excellent TDS, excellent turbidity",
    },
    Rule {
        id: 20,
        tier: Potability::Safe,
        terms: &[
            Term::Ph(PhBand::Neutral),
            Term::Tds(QualityBand::Good),
            Term::Turbidity(QualityBand::Good),
        ],
        summary: "neutral pH, good TDS, good turbidity",
    },
    Rule {
        id: 21,
        tier: Potability::Safe,
        terms: &[
            Term::Ph(PhBand::Neutral),
            Term::Tds(QualityBand::Excellent),
            Term::Turbidity(QualityBand::Good),
        ],
        summary: "neutral pH, excellent TDS, good turbidity",
    },
    Rule {
        id: 22,
        tier: Potability::Safe,
        terms: &[
            Term::Ph(PhBand::Neutral),
            Term::Tds(QualityBand::Good),
            Term::Turbidity(QualityBand::Excellent),
        ],
        summary: "neutral pH, good TDS, excellent turbidity",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_ids_are_unique_and_ascending() {
        for pair in RULES.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[test]
    fn test_danger_rules_are_single_term_unsafe() {
        for rule in RULES.iter().filter(|r| r.id <= DANGER_RULE_MAX_ID) {
            assert_eq!(rule.tier, Potability::Unsafe);
            assert_eq!(rule.terms.len(), 1);
        }
    }

    #[test]
    fn test_tier_counts() {
        let count = |tier| RULES.iter().filter(|r| r.tier == tier).count();
        assert_eq!(count(Potability::Unsafe), 6);
        assert_eq!(count(Potability::Marginal), 10);
        assert_eq!(count(Potability::Safe), 6);
    }

    #[test]
    fn test_compound_rules_cover_all_dimensions() {
        for rule in RULES.iter().filter(|r| r.id > DANGER_RULE_MAX_ID) {
            assert_eq!(rule.terms.len(), 3);
            assert!(rule.terms.iter().any(|t| matches!(t, Term::Ph(_))));
            assert!(rule.terms.iter().any(|t| matches!(t, Term::Tds(_))));
            assert!(rule.terms.iter().any(|t| matches!(t, Term::Turbidity(_))));
        }
    }
}
