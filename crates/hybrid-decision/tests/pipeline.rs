//! End-to-end pipeline scenarios

use classifier::{ClassifierError, GatewayConfig, ModelGateway, PotabilityModel, ThresholdModel};
use fuzzy_core::Potability::{self, Marginal, Safe, Unsafe};
use hybrid_decision::{evaluate, Assessor, DecisionConfig};
use telemetry::WaterReading;

struct FixedModel(Potability);

impl PotabilityModel for FixedModel {
    async fn predict(
        &self,
        _ph: f64,
        _tds: f64,
        _turbidity: f64,
    ) -> Result<Potability, ClassifierError> {
        Ok(self.0)
    }
}

struct BrokenModel;

impl PotabilityModel for BrokenModel {
    async fn predict(
        &self,
        _ph: f64,
        _tds: f64,
        _turbidity: f64,
    ) -> Result<Potability, ClassifierError> {
        Err(ClassifierError::PredictionFailed("weights missing".into()))
    }
}

#[test]
fn ideal_reading_scores_safe() {
    let result = evaluate(7.0, 150.0, 0.5, Some(Safe));
    assert_eq!(result.tier, Safe);
    assert!(result.score > 85.0);
    assert_eq!(result.confidence, 100);
    assert!(result.has_active_rules);
    // R19 fires at full strength
    let r19 = result.fired_rules.iter().find(|f| f.id == 19).unwrap();
    assert!((r19.strength - 1.0).abs() < 1e-9);
}

#[test]
fn danger_confidence_depends_on_model_verdict() {
    let with_agreeing_model = evaluate(5.5, 600.0, 15.0, Some(Unsafe));
    assert_eq!(with_agreeing_model.tier, Unsafe);
    assert_eq!(with_agreeing_model.confidence, 0);

    let with_dissenting_model = evaluate(5.5, 600.0, 15.0, Some(Safe));
    assert_eq!(with_dissenting_model.tier, Unsafe);
    assert_eq!(with_dissenting_model.confidence, 25);
}

#[test]
fn no_active_rules_falls_back() {
    // pH beyond the scale has no band membership; TDS in the Good band and
    // excellent turbidity appear only in compound rules, which all need a
    // pH term, so nothing can fire
    let standalone = evaluate(15.0, 450.0, 0.5, None);
    assert!(!standalone.has_active_rules);
    assert_eq!(standalone.tier, Unsafe);
    assert_eq!(standalone.score, 0.0);
    assert_eq!(standalone.confidence, 0);

    let with_model = evaluate(15.0, 450.0, 0.5, Some(Safe));
    assert_eq!(with_model.confidence, 25);
    assert!([0u8, 25].contains(&with_model.confidence));
}

#[test]
fn arbitration_grid_matches_documented_table() {
    // Readings that pin the rule engine to each tier
    let rule_tier_reading = [
        (Unsafe, (5.5, 600.0, 15.0)),
        (Marginal, (6.7, 750.0, 15.0)),
        (Safe, (7.0, 150.0, 0.5)),
    ];

    for (rule_tier, (ph, tds, ntu)) in rule_tier_reading {
        for model in [Unsafe, Marginal, Safe] {
            let result = evaluate(ph, tds, ntu, Some(model));
            // The rule engine's tier always prevails in the documented table
            assert_eq!(
                result.tier, rule_tier,
                "model {model}, rule tier {rule_tier}"
            );
        }
    }
}

#[test]
fn outputs_stay_in_contract_ranges() {
    let grid = [
        (7.0, 150.0, 0.5),
        (6.55, 100.0, 0.5),
        (5.0, 1500.0, 200.0),
        (8.55, 300.5, 1.05),
        (-3.0, -10.0, -1.0),
        (20.0, 3000.0, 500.0),
    ];
    for (ph, tds, ntu) in grid {
        for model in [None, Some(Unsafe), Some(Marginal), Some(Safe)] {
            let result = evaluate(ph, tds, ntu, model);
            assert!((0.0..=100.0).contains(&result.score));
            assert!(result.confidence <= 100);
            for (_, s) in result.strengths.iter() {
                assert!((0.0..=1.0).contains(&s));
            }
        }
    }
}

#[test]
fn explanation_trace_reports_the_pipeline() {
    let result = evaluate(6.8, 420.0, 2.3, Some(Marginal));
    let text = result.explanation.join("\n");
    assert!(text.contains("pH memberships"));
    assert!(text.contains("active rules"));
    assert!(text.contains("defuzzified score"));
    assert!(text.contains("final tier"));
    assert!(text.contains("total confidence"));
}

#[tokio::test]
async fn assessor_consults_the_gateway() {
    let assessor = Assessor::default();
    let gateway = ModelGateway::new(ThresholdModel::new());
    let result = assessor
        .assess(&WaterReading::new(7.0, 150.0, 0.5), &gateway)
        .await;
    assert_eq!(result.tier, Safe);
    // Threshold model agrees, so the model component lands on top of the
    // rule ceiling
    assert_eq!(result.confidence, 100);
}

#[tokio::test]
async fn broken_model_degrades_to_standalone() {
    let assessor = Assessor::default();
    let gateway = ModelGateway::with_config(BrokenModel, GatewayConfig { timeout_ms: 50 });
    let result = assessor
        .assess(&WaterReading::new(7.0, 150.0, 0.5), &gateway)
        .await;
    assert_eq!(result.tier, Safe);
    // No model component without a classifier
    assert_eq!(result.confidence, 75);
    assert!(result
        .explanation
        .iter()
        .any(|line| line.contains("classifier unavailable")));
}

#[tokio::test]
async fn fixed_model_drives_arbitration_notes() {
    let assessor = Assessor::new(DecisionConfig::default());
    let gateway = ModelGateway::new(FixedModel(Unsafe));
    let result = assessor
        .assess(&WaterReading::new(7.0, 150.0, 0.5), &gateway)
        .await;
    assert_eq!(result.tier, Safe);
    assert!(result
        .explanation
        .iter()
        .any(|line| line.contains("disagrees")));
}
