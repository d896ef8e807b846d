pub mod catalog;
pub mod config;
pub mod doctor;
pub mod profile;
pub mod questions;
pub mod recommend;
pub mod session;

use fragrance_core::domain::quiz::QuizAnswer;
use fragrance_core::quiz::validate_answers;
use serde::Serialize;

pub const EXIT_INPUT_INVALID: u8 = 2;
pub const EXIT_SESSION_REJECTED: u8 = 3;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: String,
    message: String,
}

impl CommandResult {
    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: error_class.to_string(),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Successful plain-text output.
    pub fn text(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    /// Successful pretty-printed JSON document.
    pub fn json<T: Serialize>(command: &str, value: &T) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(output) => Self { exit_code: 0, output },
            Err(error) => Self::failure(command, "serialization", error.to_string(), 1),
        }
    }
}

/// Parses repeated `--answer question=option` flags and validates them
/// against the quiz definition.
pub(crate) fn parse_answers(
    command: &str,
    raw: &[String],
) -> Result<Vec<QuizAnswer>, CommandResult> {
    let mut answers = Vec::with_capacity(raw.len());
    for entry in raw {
        let Some((question, option)) = entry.split_once('=') else {
            return Err(CommandResult::failure(
                command,
                "input_validation",
                format!("answer `{entry}` must have the form QUESTION=OPTION"),
                EXIT_INPUT_INVALID,
            ));
        };
        answers.push(QuizAnswer::new(question.trim(), option.trim()));
    }

    validate_answers(&answers).map_err(|error| {
        CommandResult::failure(command, "input_validation", error.to_string(), EXIT_INPUT_INVALID)
    })?;

    Ok(answers)
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_answers, EXIT_INPUT_INVALID};

    #[test]
    fn parses_question_option_pairs() {
        let raw = ["mood=bold-mysterious".to_string(), " notes = smoky-woods ".to_string()];
        let answers = parse_answers("profile", &raw).expect("valid answers");
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[1].question_id, "notes");
        assert_eq!(answers[1].answer, "smoky-woods");
    }

    #[test]
    fn rejects_entries_without_separator() {
        let error = parse_answers("profile", &["bold-mysterious".to_string()])
            .expect_err("missing separator");
        assert_eq!(error.exit_code, EXIT_INPUT_INVALID);
        assert!(error.output.contains("QUESTION=OPTION"));
    }

    #[test]
    fn rejects_unknown_options() {
        let error =
            parse_answers("profile", &["mood=sleepy".to_string()]).expect_err("unknown option");
        assert!(error.output.contains("\"error_class\":\"input_validation\""));
    }
}
