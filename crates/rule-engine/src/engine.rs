//! Rule Evaluation

use crate::rules::{Rule, Term, DANGER_RULE_MAX_ID, RULES};
use fuzzy_core::{BandVector, PhVector, TierStrengths};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Audit record for a rule whose antecedent fired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiredRule {
    /// Id of the rule that fired
    pub id: u8,
    /// Antecedent strength in (0, 1]
    pub strength: f64,
    /// Condition summary
    pub summary: String,
}

impl FiredRule {
    /// Display name, e.g. "R7"
    pub fn name(&self) -> String {
        format!("R{}", self.id)
    }
}

/// Firing strengths plus the audit trail in rule-id order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Max firing strength per tier
    pub strengths: TierStrengths,
    /// Every rule that fired, ascending by id
    pub fired: Vec<FiredRule>,
}

impl RuleOutcome {
    /// Whether any rule fired at all
    pub fn has_active_rules(&self) -> bool {
        !self.fired.is_empty()
    }
}

/// Evaluate the full rule base against one fuzzified reading.
///
/// Antecedent strength is the min over a rule's terms (fuzzy AND); strengths
/// aggregate per tier by max (fuzzy OR). Rules fire only at strength > 0.
pub fn evaluate_rules(ph: &PhVector, tds: &BandVector, turbidity: &BandVector) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();

    for rule in RULES.iter() {
        let strength = antecedent_strength(rule, ph, tds, turbidity);
        if strength > 0.0 {
            debug!(rule = rule.id, strength, "rule fired");
            outcome.strengths.note(rule.tier, strength);
            outcome.fired.push(FiredRule {
                id: rule.id,
                strength,
                summary: rule.summary.to_string(),
            });
        }
    }

    outcome
}

fn antecedent_strength(
    rule: &Rule,
    ph: &PhVector,
    tds: &BandVector,
    turbidity: &BandVector,
) -> f64 {
    rule.terms
        .iter()
        .map(|term| match term {
            Term::Ph(band) => ph.degree(*band),
            Term::Tds(band) => tds.degree(*band),
            Term::Turbidity(band) => turbidity.degree(*band),
        })
        .fold(1.0, f64::min)
}

/// Whether any of the single-term danger alarms is in the fired set
pub fn has_danger_rule(fired: &[FiredRule]) -> bool {
    fired.iter().any(|f| f.id <= DANGER_RULE_MAX_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzy_core::{fuzzify_ph, fuzzify_tds, fuzzify_turbidity, Potability};

    fn outcome_for(ph: f64, tds: f64, ntu: f64) -> RuleOutcome {
        evaluate_rules(
            &fuzzify_ph(ph),
            &fuzzify_tds(tds),
            &fuzzify_turbidity(ntu),
        )
    }

    #[test]
    fn test_ideal_water_fires_pure_safe_rule() {
        let outcome = outcome_for(7.0, 150.0, 0.5);
        assert_eq!(outcome.strengths.get(Potability::Safe), 1.0);
        assert_eq!(outcome.strengths.get(Potability::Unsafe), 0.0);
        assert!(outcome.fired.iter().any(|f| f.id == 19 && f.strength == 1.0));
    }

    #[test]
    fn test_acidic_water_trips_danger_alarm() {
        let outcome = outcome_for(5.5, 600.0, 15.0);
        assert_eq!(outcome.strengths.get(Potability::Unsafe), 1.0);
        assert_eq!(outcome.fired.len(), 1);
        assert_eq!(outcome.fired[0].id, 1);
        assert!(has_danger_rule(&outcome.fired));
    }

    #[test]
    fn test_partial_membership_propagates_min() {
        // pH 6.55 splits Acidic/SlightlyAcidic at 0.5 each; TDS and
        // turbidity excellent, so R1 fires at 0.5 and R17 at 0.5
        let outcome = outcome_for(6.55, 100.0, 0.5);
        assert!((outcome.strengths.get(Potability::Unsafe) - 0.5).abs() < 1e-9);
        assert!((outcome.strengths.get(Potability::Safe) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_rule_fires_for_out_of_domain_ph() {
        // pH beyond the scale has no band membership, and every compound
        // rule needs a pH term; TDS in the Good band has no danger alarm
        let outcome = outcome_for(15.0, 450.0, 0.5);
        assert!(!outcome.has_active_rules());
        assert_eq!(outcome.strengths.max(), 0.0);
    }

    #[test]
    fn test_fired_rules_keep_id_order() {
        // Turbid acidic water trips R1 (pH) and R5 (turbidity)
        let outcome = outcome_for(5.0, 100.0, 50.0);
        let ids: Vec<u8> = outcome.fired.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_fired_rule_name() {
        let outcome = outcome_for(5.5, 600.0, 15.0);
        assert_eq!(outcome.fired[0].name(), "R1");
    }
}
