use chrono::Utc;
use fragrance_core::catalog::storefront;
use fragrance_core::config::{AppConfig, LoadOptions};
use fragrance_core::domain::product::Category;
use fragrance_core::domain::quiz::QuizAnswer;
use fragrance_core::quiz::questions;
use fragrance_core::recommend::CategoryWeights;
use fragrance_core::session::SessionCodec;
use serde::Serialize;

use crate::commands::{CommandResult, EXIT_INPUT_INVALID};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code = if report.overall_status == CheckStatus::Pass { 0 } else { EXIT_INPUT_INVALID };

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_session_signing(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "session_signing",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    checks.push(check_catalog_integrity());
    checks.push(check_quiz_tables());

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_session_signing(config: &AppConfig) -> DoctorCheck {
    let result = SessionCodec::from_config(&config.session).and_then(|codec| {
        let now = Utc::now();
        let (token, _) = codec.issue(&[QuizAnswer::new("mood", "bold-mysterious")], now)?;
        codec.open(token.as_str(), now)
    });

    match result {
        Ok(_) => DoctorCheck {
            name: "session_signing",
            status: CheckStatus::Pass,
            details: format!(
                "token round trip verified (ttl {}s)",
                config.session.ttl_secs
            ),
        },
        Err(error) => DoctorCheck {
            name: "session_signing",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn check_catalog_integrity() -> DoctorCheck {
    let catalog = storefront();
    if catalog.is_empty() {
        return DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Fail,
            details: "catalog has no products".to_string(),
        };
    }

    match catalog.validate() {
        Ok(()) => DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Pass,
            details: format!(
                "{} products and {} collections resolved",
                catalog.len(),
                catalog.collections().len()
            ),
        },
        Err(error) => DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn check_quiz_tables() -> DoctorCheck {
    let weights = CategoryWeights::default();
    let mut problems = Vec::new();

    for category in Category::ALL {
        if weights.get(category).is_none() {
            problems.push(format!("category `{category}` has no weight vector"));
        }
    }
    for question in questions() {
        if question.options.is_empty() {
            problems.push(format!("question `{}` has no options", question.id));
        }
        for option in question.options {
            if option.weights.total() <= 0.0 {
                problems.push(format!("option `{}.{}` has no weight", question.id, option.id));
            }
        }
    }

    if problems.is_empty() {
        DoctorCheck {
            name: "quiz_tables",
            status: CheckStatus::Pass,
            details: format!(
                "{} questions weighted across {} categories",
                questions().len(),
                Category::ALL.len()
            ),
        }
    } else {
        DoctorCheck { name: "quiz_tables", status: CheckStatus::Fail, details: problems.join("; ") }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
