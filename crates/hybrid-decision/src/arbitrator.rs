//! Hybrid Arbitration
//!
//! Reconciles the model's tier with the rule engine's tier. The table is
//! total over all nine pairs: the rule engine's tier always prevails, with
//! the rationale recording whether that was agreement, specificity
//! preference, or the safety-first override.

use fuzzy_core::Potability;
use serde::Serialize;
use tracing::info;

/// Outcome of reconciling the two verdicts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arbitration {
    /// Tier reported to the caller
    pub final_tier: Potability,
    /// One-line decision rationale
    pub rationale: &'static str,
    /// Whether the two sources disagreed
    pub disagreement: bool,
}

/// Apply the fixed arbitration table.
///
/// `model` is `None` when the classifier is unavailable; the rule engine's
/// verdict then stands alone.
pub fn arbitrate(model: Option<Potability>, rules: Potability) -> Arbitration {
    use Potability::{Marginal, Safe, Unsafe};

    let Some(model_tier) = model else {
        return Arbitration {
            final_tier: rules,
            rationale: "classifier unavailable, rule engine verdict stands",
            disagreement: false,
        };
    };

    let (final_tier, rationale) = match (model_tier, rules) {
        (Unsafe, Unsafe) | (Marginal, Marginal) | (Safe, Safe) => {
            (rules, "model and rule engine agree")
        }
        (Unsafe, Safe) => (Safe, "rule engine's positive verdict is more specific"),
        (Unsafe, Marginal) => (Marginal, "rule engine's verdict is more specific"),
        (Safe, Marginal) => (Marginal, "rule engine's verdict is more specific"),
        (Marginal, Safe) => (Safe, "rule engine verdict preferred"),
        (Safe, Unsafe) | (Marginal, Unsafe) => (
            Unsafe,
            "safety-first override: rule engine detected unsafe water",
        ),
    };

    let disagreement = model_tier != rules;
    if disagreement {
        info!(model = %model_tier, rules = %rules, %final_tier, "verdicts disagree");
    }

    Arbitration {
        final_tier,
        rationale,
        disagreement,
    }
}
