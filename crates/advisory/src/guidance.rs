//! Operator Guidance
//!
//! Per-tier recommendation text with parameter-specific findings. The
//! thresholds mirror the classification bands, not the fuzzy ramps.

use fuzzy_core::Potability;
use telemetry::WaterReading;

/// Recommendation lines for a verdict on a reading
pub fn recommendations(tier: Potability, reading: &WaterReading) -> Vec<String> {
    match tier {
        Potability::Unsafe => unsafe_guidance(reading),
        Potability::Marginal => marginal_guidance(reading),
        Potability::Safe => safe_guidance(reading),
    }
}

fn unsafe_guidance(reading: &WaterReading) -> Vec<String> {
    let mut lines = vec![
        "water is not safe to drink".to_string(),
        "do not consume under any circumstances".to_string(),
    ];

    if reading.ph <= 6.5 {
        lines.push(format!(
            "pH {:.2} is too acidic; raise it gradually with soda ash or an alkaline medium",
            reading.ph
        ));
    } else if reading.ph >= 8.6 {
        lines.push(format!(
            "pH {:.2} is too alkaline; lower it gradually with a mild acid dosing",
            reading.ph
        ));
    }

    if reading.tds >= 1200.0 {
        lines.push(format!(
            "TDS {:.1} mg/L is extreme; only reverse osmosis will bring it down",
            reading.tds
        ));
    } else if reading.tds > 900.0 {
        lines.push(format!(
            "TDS {:.1} mg/L exceeds the acceptable limit; install a filtration stage",
            reading.tds
        ));
    }

    if reading.turbidity > 100.0 {
        lines.push(format!(
            "turbidity {:.2} NTU suggests microbial contamination; stop use and inspect the source",
            reading.turbidity
        ));
    } else if reading.turbidity > 25.0 {
        lines.push(format!(
            "turbidity {:.2} NTU is above standard; filter or let the water settle",
            reading.turbidity
        ));
    }

    lines.push("switch to a known safe source until readings recover".into());
    lines
}

fn marginal_guidance(reading: &WaterReading) -> Vec<String> {
    let mut lines = vec![
        "water is drinkable with reservations".to_string(),
        "quality meets minimum limits but is not optimal".to_string(),
    ];

    if (6.6..=6.9).contains(&reading.ph) {
        lines.push(format!("pH {:.2} is slightly acidic; monitor it", reading.ph));
    } else if (7.1..=8.5).contains(&reading.ph) {
        lines.push(format!(
            "pH {:.2} is slightly alkaline; monitor it",
            reading.ph
        ));
    }

    if reading.tds > 600.0 {
        lines.push(format!(
            "TDS {:.1} mg/L is on the high side; consider a filtration stage",
            reading.tds
        ));
    }

    if reading.turbidity > 5.0 {
        lines.push(format!(
            "turbidity {:.2} NTU is elevated; a simple filter would help",
            reading.turbidity
        ));
    }

    lines.push("prefer a better source when available and re-check regularly".into());
    lines
}

fn safe_guidance(reading: &WaterReading) -> Vec<String> {
    let mut lines = vec![
        "water meets drinking-water standards".to_string(),
        "safe for long-term consumption".to_string(),
    ];

    if (6.6..=6.9).contains(&reading.ph) {
        lines.push(
            "pH is slightly acidic; keep it from drifting below 6.5 with periodic checks".into(),
        );
    } else if (7.1..=8.5).contains(&reading.ph) {
        lines.push(
            "pH is slightly alkaline; keep it from drifting above 8.5 with periodic checks".into(),
        );
    }

    lines.push("store away from direct sunlight and keep the source protected".into());
    lines
}
