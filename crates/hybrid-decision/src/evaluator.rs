//! Assessment Pipeline
//!
//! Fuzzify, evaluate the rule base, defuzzify, arbitrate against the model,
//! and score trust. The pipeline is a pure function of its inputs; the
//! async front-end only exists to await the model gateway.

use crate::arbitrator::arbitrate;
use crate::assessment::Assessment;
use crate::confidence::score_confidence;
use crate::config::DecisionConfig;
use classifier::{ModelGateway, PotabilityModel};
use fuzzy_core::{
    defuzzify_at, fuzzify_ph, fuzzify_tds, fuzzify_turbidity, BandVector, PhVector, Potability,
};
use rule_engine::evaluate_rules;
use telemetry::WaterReading;
use tracing::info;

/// Evaluate one reading under the default policy.
///
/// `model_tier` is the external classifier's verdict, or `None` when the
/// classifier is unavailable.
pub fn evaluate(
    ph: f64,
    tds: f64,
    turbidity: f64,
    model_tier: Option<Potability>,
) -> Assessment {
    evaluate_with(ph, tds, turbidity, model_tier, &DecisionConfig::default())
}

fn evaluate_with(
    ph: f64,
    tds: f64,
    turbidity: f64,
    model_tier: Option<Potability>,
    config: &DecisionConfig,
) -> Assessment {
    let ph_vec = fuzzify_ph(ph);
    let tds_vec = fuzzify_tds(tds);
    let turbidity_vec = fuzzify_turbidity(turbidity);

    let outcome = evaluate_rules(&ph_vec, &tds_vec, &turbidity_vec);
    let has_active_rules = outcome.has_active_rules();

    let rule_tier = config
        .rule_policy
        .select(&outcome.strengths)
        .unwrap_or(config.rule_policy.no_rule_default);

    // The centroid is only meaningful when something fired
    let score = if has_active_rules {
        defuzzify_at(&outcome.strengths, config.centroid_resolution)
    } else {
        0.0
    };

    let arbitration = arbitrate(model_tier, rule_tier);
    let (confidence, confidence_trace) = score_confidence(
        rule_tier,
        &outcome.strengths,
        &outcome.fired,
        ph,
        tds,
        turbidity,
        model_tier,
    );

    let mut explanation = Vec::new();
    explanation.push(format!("pH = {ph}"));
    explanation.push(format!("TDS = {tds} mg/L"));
    explanation.push(format!("turbidity = {turbidity} NTU"));
    describe_memberships(&ph_vec, &tds_vec, &turbidity_vec, &mut explanation);

    if has_active_rules {
        explanation.push("active rules:".into());
        for fired in &outcome.fired {
            explanation.push(format!(
                "  {} (strength {:.3}): {}",
                fired.name(),
                fired.strength,
                fired.summary
            ));
        }
        explanation.push("firing strengths:".into());
        for (tier, strength) in outcome.strengths.iter() {
            if strength > 0.0 {
                explanation.push(format!("  {tier}: {strength:.3}"));
            }
        }
        explanation.push(format!("defuzzified score: {score:.2}"));
    } else {
        explanation
            .push("no rules active: the reading matches no known parameter combination".into());
    }

    if let Some(model) = model_tier {
        explanation.push(format!("model verdict: {model}"));
        explanation.push(format!("rule engine verdict: {rule_tier}"));
        explanation.push(format!("decision: {}", arbitration.rationale));
        if arbitration.disagreement {
            explanation.push(format!(
                "note: model ({model}) disagrees with the rule engine ({rule_tier})"
            ));
        }
    } else {
        explanation.push(format!(
            "rule engine verdict: {rule_tier} (classifier unavailable)"
        ));
    }
    explanation.push(format!("final tier: {}", arbitration.final_tier));
    explanation.extend(confidence_trace);

    info!(
        tier = %arbitration.final_tier,
        score,
        confidence,
        active_rules = outcome.fired.len(),
        "assessment complete"
    );

    Assessment {
        tier: arbitration.final_tier,
        score,
        confidence,
        has_active_rules,
        fired_rules: outcome.fired,
        strengths: outcome.strengths,
        explanation,
    }
}

fn describe_memberships(
    ph: &PhVector,
    tds: &BandVector,
    turbidity: &BandVector,
    explanation: &mut Vec<String>,
) {
    let ph_parts: Vec<String> = ph
        .significant()
        .map(|(band, d)| format!("{} {:.3}", band.label(), d))
        .collect();
    if !ph_parts.is_empty() {
        explanation.push(format!("pH memberships: {}", ph_parts.join(", ")));
    }

    let tds_parts: Vec<String> = tds
        .significant()
        .map(|(band, d)| format!("{} {:.3}", band.label(), d))
        .collect();
    if !tds_parts.is_empty() {
        explanation.push(format!("TDS memberships: {}", tds_parts.join(", ")));
    }

    let turbidity_parts: Vec<String> = turbidity
        .significant()
        .map(|(band, d)| format!("{} {:.3}", band.label(), d))
        .collect();
    if !turbidity_parts.is_empty() {
        explanation.push(format!(
            "turbidity memberships: {}",
            turbidity_parts.join(", ")
        ));
    }
}

/// Pipeline front-end holding the decision policy
pub struct Assessor {
    config: DecisionConfig,
}

impl Assessor {
    /// Create an assessor with an explicit policy
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    /// The configured policy
    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Assess a reading with the model consulted through its gateway
    pub async fn assess<M: PotabilityModel>(
        &self,
        reading: &WaterReading,
        gateway: &ModelGateway<M>,
    ) -> Assessment {
        let model_tier = gateway
            .predict(reading.ph, reading.tds, reading.turbidity)
            .await;
        evaluate_with(
            reading.ph,
            reading.tds,
            reading.turbidity,
            model_tier,
            &self.config,
        )
    }

    /// Assess a reading in standalone rule-engine mode
    pub fn assess_standalone(&self, reading: &WaterReading) -> Assessment {
        evaluate_with(
            reading.ph,
            reading.tds,
            reading.turbidity,
            None,
            &self.config,
        )
    }
}

impl Default for Assessor {
    fn default() -> Self {
        Self::new(DecisionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzy_core::Potability::{Marginal, Safe, Unsafe};

    #[test]
    fn test_ideal_water_is_safe_with_high_score() {
        let result = evaluate(7.0, 150.0, 0.5, None);
        assert_eq!(result.tier, Safe);
        assert!(result.has_active_rules);
        assert!(result.score > 85.0, "score {}", result.score);
        assert!(result.fired_rules.iter().any(|f| f.id == 19));
    }

    #[test]
    fn test_acidic_water_is_unsafe_regardless_of_model() {
        for model in [None, Some(Safe), Some(Marginal), Some(Unsafe)] {
            let result = evaluate(5.5, 600.0, 15.0, model);
            assert_eq!(result.tier, Unsafe);
            assert!(result.fired_rules.iter().any(|f| f.id == 1));
        }
    }

    #[test]
    fn test_no_active_rules_defaults_unsafe_with_zero_score() {
        let result = evaluate(15.0, 450.0, 0.5, None);
        assert!(!result.has_active_rules);
        assert_eq!(result.tier, Unsafe);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let first = evaluate(6.8, 420.0, 2.3, Some(Marginal));
        let second = evaluate(6.8, 420.0, 2.3, Some(Marginal));
        assert_eq!(first, second);
    }

    #[test]
    fn test_disagreement_is_annotated() {
        let result = evaluate(7.0, 150.0, 0.5, Some(Unsafe));
        assert_eq!(result.tier, Safe);
        assert!(result
            .explanation
            .iter()
            .any(|line| line.contains("disagrees")));
    }

    #[test]
    fn test_standalone_mode_notes_missing_classifier() {
        let assessor = Assessor::default();
        let result = assessor.assess_standalone(&WaterReading::new(7.0, 150.0, 0.5));
        assert!(result
            .explanation
            .iter()
            .any(|line| line.contains("classifier unavailable")));
    }
}
