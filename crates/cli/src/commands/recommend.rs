use fragrance_core::recommend::{evaluate_answers, QuizOutcome, DEFAULT_RECOMMENDATION_LIMIT};

use crate::commands::profile::render_profile;
use crate::commands::{parse_answers, CommandResult};

pub fn run(raw_answers: &[String], limit: Option<usize>, json_output: bool) -> CommandResult {
    let answers = match parse_answers("recommend", raw_answers) {
        Ok(answers) => answers,
        Err(failure) => return failure,
    };

    let outcome = evaluate_answers(&answers, limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT));
    if json_output {
        return CommandResult::json("recommend", &outcome);
    }

    CommandResult::text(render_outcome(&outcome))
}

pub(crate) fn render_outcome(outcome: &QuizOutcome<'_>) -> String {
    let mut lines = vec![
        format!("{} ({})", outcome.family.headline(), outcome.family),
        render_profile(&outcome.profile),
        String::new(),
    ];

    for (rank, recommendation) in outcome.recommendations.iter().enumerate() {
        lines.push(format!(
            "{}. {} - {} ({})",
            rank + 1,
            recommendation.product.name,
            recommendation.match_strength.display_percentage(recommendation.score),
            recommendation.product.id
        ));
        for reason in &recommendation.reasons {
            lines.push(format!("   {reason}"));
        }
    }

    lines.join("\n")
}
