use fragrance_core::domain::profile::{ScentFamily, ScentProfile};
use fragrance_core::recommend::{calculate_scent_profile, family_from_profile};
use serde::Serialize;

use crate::commands::{parse_answers, CommandResult};

#[derive(Debug, Serialize)]
struct ProfileReport {
    profile: ScentProfile,
    family: ScentFamily,
    headline: &'static str,
    description: &'static str,
}

pub fn run(raw_answers: &[String], json_output: bool) -> CommandResult {
    let answers = match parse_answers("profile", raw_answers) {
        Ok(answers) => answers,
        Err(failure) => return failure,
    };

    let profile = calculate_scent_profile(&answers);
    let family = family_from_profile(&profile);
    let report = ProfileReport {
        profile,
        family,
        headline: family.headline(),
        description: family.description(),
    };

    if json_output {
        return CommandResult::json("profile", &report);
    }

    CommandResult::text(render_human(&report))
}

pub(crate) fn render_profile(profile: &ScentProfile) -> String {
    format!(
        "oud {:.2} | amber {:.2} | floral {:.2} | gourmand {:.2}",
        profile.oud, profile.amber, profile.floral, profile.gourmand
    )
}

fn render_human(report: &ProfileReport) -> String {
    [
        format!("{} ({})", report.headline, report.family),
        report.description.to_string(),
        render_profile(&report.profile),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn bold_answers_produce_oud_family() {
        let result = run(
            &["mood=bold-mysterious".to_string(), "notes=smoky-woods".to_string()],
            true,
        );
        assert_eq!(result.exit_code, 0);

        let report: serde_json::Value = serde_json::from_str(&result.output).expect("json");
        assert_eq!(report["family"], "oud-rich");
        let total: f64 = ["oud", "amber", "floral", "gourmand"]
            .iter()
            .map(|key| report["profile"][key].as_f64().unwrap_or_default())
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_answers_are_rejected() {
        let result =
            run(&["mood=bold-mysterious".to_string(), "mood=sweet-playful".to_string()], false);
        assert_eq!(result.exit_code, 2);
        assert!(result.output.contains("more than once"));
    }
}
