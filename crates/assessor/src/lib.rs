//! Water Potability Assessment Harness
//!
//! Wires the model gateway, decision engine, and advisory layer behind a
//! small command-line front-end. Presentation stays plain text or JSON; the
//! engine output is not reformatted beyond that.

use advisory::{recommendations, AdvisoryManager, Severity};
use classifier::{GatewayConfig, ModelGateway, ThresholdModel};
use fuzzy_core::verify_tables;
use hybrid_decision::{Assessment, Assessor, DecisionConfig};
use serde::Serialize;
use telemetry::{ReadingValidator, WaterReading};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    /// Reading to assess
    pub reading: WaterReading,
    /// Emit JSON instead of text
    pub json: bool,
    /// Skip the bundled model and run standalone
    pub no_model: bool,
    /// Optional decision config file
    pub config_path: Option<String>,
}

/// Parse `ph tds turbidity` plus flags
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut values = Vec::new();
    let mut json = false;
    let mut no_model = false;
    let mut config_path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--no-model" => no_model = true,
            "--config" => {
                config_path = Some(
                    iter.next()
                        .ok_or_else(|| "--config needs a path".to_string())?
                        .clone(),
                );
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag: {flag}"));
            }
            value => {
                let parsed: f64 = value
                    .parse()
                    .map_err(|_| format!("not a number: {value}"))?;
                values.push(parsed);
            }
        }
    }

    if values.len() != 3 {
        return Err(format!(
            "expected three readings (ph tds turbidity), got {}",
            values.len()
        ));
    }

    Ok(CliArgs {
        reading: WaterReading::new(values[0], values[1], values[2]),
        json,
        no_model,
        config_path,
    })
}

/// Usage text for the binary
pub fn usage() -> &'static str {
    "usage: water-pipeline <ph> <tds> <turbidity> [--json] [--no-model] [--config <path>]"
}

/// Install the global log subscriber
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Full report handed to the operator
#[derive(Debug, Serialize)]
pub struct Report {
    /// The assessed reading
    pub reading: WaterReading,
    /// Engine output
    pub assessment: Assessment,
    /// Notification severity for the final tier
    pub severity: Severity,
    /// Operator guidance
    pub recommendations: Vec<String>,
}

impl Report {
    /// Render as plain text
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("reading: {}\n", self.reading));
        out.push_str(&format!("tier: {}\n", self.assessment.tier));
        out.push_str(&format!("score: {:.2}\n", self.assessment.score));
        out.push_str(&format!("confidence: {}\n", self.assessment.confidence));
        out.push_str("explanation:\n");
        for line in &self.assessment.explanation {
            out.push_str(&format!("  {line}\n"));
        }
        out.push_str("recommendations:\n");
        for line in &self.recommendations {
            out.push_str(&format!("  - {line}\n"));
        }
        out
    }
}

/// Run one assessment; returns the process exit code
pub async fn run(args: CliArgs) -> Result<i32, Box<dyn std::error::Error>> {
    verify_tables()?;

    let config = DecisionConfig::load(args.config_path.as_deref())?;
    let assessor = Assessor::new(config.clone());

    // Implausible readings are logged and assessed anyway
    ReadingValidator::default().check(&args.reading);

    let assessment = if args.no_model {
        info!("running standalone, classifier disabled");
        assessor.assess_standalone(&args.reading)
    } else {
        let gateway = ModelGateway::with_config(
            ThresholdModel::new(),
            GatewayConfig {
                timeout_ms: config.model_timeout_ms,
            },
        );
        assessor.assess(&args.reading, &gateway).await
    };

    let manager = AdvisoryManager::default();
    let report = Report {
        severity: manager.severity(assessment.tier),
        recommendations: recommendations(assessment.tier, &args.reading),
        reading: args.reading,
        assessment,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(if report.assessment.tier == fuzzy_core::Potability::Unsafe {
        2
    } else {
        0
    })
}
