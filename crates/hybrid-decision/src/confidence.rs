//! Trust Scoring
//!
//! Integer 0-100 score for "how much to trust this tier". A danger-alarm
//! block takes precedence; otherwise the score is a model-agreement
//! component plus a rule-engine component with tier-specific base, bonuses,
//! and ceiling.

use fuzzy_core::{Potability, TierStrengths};
use rule_engine::{has_danger_rule, FiredRule};

/// Score the trust in the rule engine's tier.
///
/// `model_tier` is `None` when the classifier is unavailable; the model
/// component is then fixed at zero. Returns the score and a breakdown trace
/// for the explanation.
pub fn score_confidence(
    rule_tier: Potability,
    strengths: &TierStrengths,
    fired: &[FiredRule],
    ph: f64,
    tds: f64,
    turbidity: f64,
    model_tier: Option<Potability>,
) -> (u8, Vec<String>) {
    // Danger alarms drive the score outright: 0 means "act on the unsafe
    // verdict, not on a score"; a dissenting all-clear from the model is
    // surfaced at 25 rather than suppressed.
    if has_danger_rule(fired) {
        let names: Vec<String> = fired
            .iter()
            .filter(|f| f.id <= rule_engine::DANGER_RULE_MAX_ID)
            .map(|f| f.name())
            .collect();
        let names = names.join(", ");

        if model_tier == Some(Potability::Safe) {
            let trace = vec![
                format!("danger alarm active: {names}"),
                "model disagrees and predicts safe; confidence 25 from the model alone".into(),
                "verify with a repeat measurement before trusting either source".into(),
            ];
            return (25, trace);
        }
        let trace = vec![
            format!("danger alarm active: {names}"),
            "confidence 0: water is flagged unsafe, act on the verdict rather than the score"
                .into(),
        ];
        return (0, trace);
    }

    // Nothing fired: the rule base has no opinion, so only a favorable
    // model verdict lends any trust.
    if fired.is_empty() {
        return if model_tier == Some(Potability::Safe) {
            (
                25,
                vec!["no rules active; confidence 25 from the model's safe verdict alone".into()],
            )
        } else {
            (
                0,
                vec!["no rules active and no corroborating model verdict; confidence 0".into()],
            )
        };
    }

    let mut trace = Vec::new();

    let ml = match model_tier {
        Some(tier) if tier == rule_tier => {
            trace.push(format!("model component: 25 (model agrees: {tier})"));
            25i64
        }
        Some(tier) => {
            trace.push(format!(
                "model component: 0 (model predicts {tier}, rules say {rule_tier})"
            ));
            0
        }
        None => {
            trace.push("model component: 0 (classifier unavailable)".into());
            0
        }
    };

    let strength_bonus = (strengths.max() * 10.0).floor() as i64;

    let es = match rule_tier {
        Potability::Safe => {
            let quality = safe_quality_bonus(ph, tds, turbidity);
            let specificity = safe_specificity_bonus(fired);
            let es = (40 + strength_bonus + quality + specificity).clamp(0, 75);
            trace.push(format!(
                "rule component: base 40 + strength {strength_bonus} + quality {quality} \
                 + specificity {specificity} = {es} (ceiling 75)"
            ));
            es
        }
        Potability::Marginal => {
            let quality = marginal_quality_bonus(ph, tds, turbidity);
            let specificity = marginal_specificity_bonus(fired);
            let es = (25 + strength_bonus + quality + specificity).clamp(0, 50);
            trace.push(format!(
                "rule component: base 25 + strength {strength_bonus} + quality {quality} \
                 + specificity {specificity} = {es} (ceiling 50)"
            ));
            es
        }
        // An unsafe tier without a danger alarm never happens with the
        // shipped rule base; contribute nothing if it ever does.
        Potability::Unsafe => {
            trace.push("rule component: 0 (unsafe tier)".into());
            0
        }
    };

    let total = (ml + es).clamp(0, 100) as u8;
    trace.push(format!("total confidence: {total}"));
    (total, trace)
}

fn safe_quality_bonus(ph: f64, tds: f64, turbidity: f64) -> i64 {
    let mut bonus = 0;

    if (6.95..=7.05).contains(&ph) {
        bonus += 3;
    } else if (6.8..=7.2).contains(&ph) {
        bonus += 2;
    } else if (6.5..=8.5).contains(&ph) {
        bonus += 1;
    }

    if tds <= 300.0 {
        bonus += 3;
    } else if tds <= 500.0 {
        bonus += 2;
    } else if tds <= 600.0 {
        bonus += 1;
    }

    if turbidity <= 1.0 {
        bonus += 4;
    } else if turbidity <= 3.0 {
        bonus += 3;
    } else if turbidity <= 5.0 {
        bonus += 2;
    }

    bonus
}

fn marginal_quality_bonus(ph: f64, tds: f64, turbidity: f64) -> i64 {
    let mut bonus = 0;

    if (6.95..=7.05).contains(&ph) {
        bonus += 2;
    } else if (6.8..=7.2).contains(&ph) {
        bonus += 1;
    }

    if tds <= 300.0 {
        bonus += 2;
    } else if tds <= 500.0 {
        bonus += 1;
    }

    if turbidity <= 1.0 {
        bonus += 1;
    }

    bonus
}

fn safe_specificity_bonus(fired: &[FiredRule]) -> i64 {
    if fired.iter().any(|f| (19..=22).contains(&f.id)) {
        15
    } else if fired.iter().any(|f| (17..=18).contains(&f.id)) {
        10
    } else {
        0
    }
}

fn marginal_specificity_bonus(fired: &[FiredRule]) -> i64 {
    if fired.iter().any(|f| (11..=16).contains(&f.id)) {
        10
    } else {
        5
    }
}
