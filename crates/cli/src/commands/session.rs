use chrono::{DateTime, Utc};
use fragrance_core::config::{AppConfig, LoadOptions};
use fragrance_core::recommend::{evaluate_answers, QuizOutcome};
use fragrance_core::session::SessionCodec;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::commands::{parse_answers, CommandResult, EXIT_INPUT_INVALID, EXIT_SESSION_REJECTED};

#[derive(Debug, Serialize)]
struct IssuedSession {
    token: String,
    session_id: Uuid,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct OpenedSession<'a> {
    session_id: Uuid,
    issued_at: DateTime<Utc>,
    #[serde(flatten)]
    outcome: QuizOutcome<'a>,
}

pub fn issue(raw_answers: &[String]) -> CommandResult {
    let answers = match parse_answers("session_issue", raw_answers) {
        Ok(answers) => answers,
        Err(failure) => return failure,
    };
    let (_, codec) = match load_codec("session_issue") {
        Ok(loaded) => loaded,
        Err(failure) => return failure,
    };

    let issued = codec.issue(&answers, Utc::now()).and_then(|(token, session)| {
        let expires_at = codec.expires_at(&session)?;
        Ok((token, session, expires_at))
    });
    match issued {
        Ok((token, session, expires_at)) => CommandResult::json(
            "session_issue",
            &IssuedSession {
                token: token.into_string(),
                session_id: session.session_id,
                issued_at: session.issued_at,
                expires_at,
            },
        ),
        Err(error) => {
            CommandResult::failure("session_issue", "session_issue", error.to_string(), 1)
        }
    }
}

pub fn open(token: &str, limit: Option<usize>) -> CommandResult {
    let (config, codec) = match load_codec("session_open") {
        Ok(loaded) => loaded,
        Err(failure) => return failure,
    };

    let session = match codec.open(token, Utc::now()) {
        Ok(session) => session,
        Err(error) => {
            warn!(event_name = "quiz.session.rejected", error = %error, "session token rejected");
            return CommandResult::failure(
                "session_open",
                "session_rejected",
                error.to_string(),
                EXIT_SESSION_REJECTED,
            );
        }
    };

    let limit = limit
        .unwrap_or(config.recommendations.default_limit)
        .clamp(1, config.recommendations.max_limit);
    let outcome = evaluate_answers(&session.answers, limit);

    CommandResult::json(
        "session_open",
        &OpenedSession { session_id: session.session_id, issued_at: session.issued_at, outcome },
    )
}

fn load_codec(command: &str) -> Result<(AppConfig, SessionCodec), CommandResult> {
    let config = AppConfig::load(LoadOptions::default()).map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            EXIT_INPUT_INVALID,
        )
    })?;

    let codec = SessionCodec::from_config(&config.session).map_err(|error| {
        CommandResult::failure(command, "config_validation", error.to_string(), EXIT_INPUT_INVALID)
    })?;

    Ok((config, codec))
}
