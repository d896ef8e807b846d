//! Signed quiz sessions
//!
//! Carries a completed quiz's answers from the quiz step to the results step
//! as an explicit token instead of ambient client storage. Tokens have the
//! shape `v1.<hex json payload>.<hex hmac-sha256>` and expire after the
//! configured time to live.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::domain::quiz::QuizAnswer;

type HmacSha256 = Hmac<Sha256>;

pub const TOKEN_VERSION: &str = "v1";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session token is malformed")]
    Malformed,
    #[error("session token version `{0}` is not supported")]
    UnsupportedVersion(String),
    #[error("session token signature does not match")]
    InvalidSignature,
    #[error("session expired at {expired_at}")]
    Expired { expired_at: DateTime<Utc> },
    #[error("session payload could not be decoded: {0}")]
    Payload(String),
    #[error("session signing key is empty")]
    EmptySigningKey,
    #[error("session ttl of {0} seconds is out of range")]
    InvalidTtl(u64),
    #[error("session expiry is past the representable time range")]
    ExpiryOutOfRange,
}

/// Answers of one completed quiz, as carried inside a token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    pub session_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub answers: Vec<QuizAnswer>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug)]
pub struct SessionCodec {
    signing_key: SecretString,
    ttl: Duration,
}

impl SessionCodec {
    pub fn new(signing_key: SecretString, ttl: Duration) -> Result<Self, SessionError> {
        if signing_key.expose_secret().is_empty() {
            return Err(SessionError::EmptySigningKey);
        }
        Ok(Self { signing_key, ttl })
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, SessionError> {
        let ttl = i64::try_from(config.ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or(SessionError::InvalidTtl(config.ttl_secs))?;
        Self::new(config.signing_secret.clone(), ttl)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Instant after which `session` no longer opens.
    pub fn expires_at(&self, session: &QuizSession) -> Result<DateTime<Utc>, SessionError> {
        session.issued_at.checked_add_signed(self.ttl).ok_or(SessionError::ExpiryOutOfRange)
    }

    pub fn issue(
        &self,
        answers: &[QuizAnswer],
        now: DateTime<Utc>,
    ) -> Result<(SessionToken, QuizSession), SessionError> {
        let session =
            QuizSession { session_id: Uuid::new_v4(), issued_at: now, answers: answers.to_vec() };
        self.expires_at(&session)?;
        let payload =
            serde_json::to_vec(&session).map_err(|error| SessionError::Payload(error.to_string()))?;

        let body = format!("{TOKEN_VERSION}.{}", encode_hex(&payload));
        let signature = encode_hex(&self.sign(body.as_bytes())?);

        debug!(
            event_name = "quiz.session.issued",
            session_id = %session.session_id,
            answers = session.answers.len(),
            "quiz session token issued"
        );

        Ok((SessionToken(format!("{body}.{signature}")), session))
    }

    pub fn open(&self, token: &str, now: DateTime<Utc>) -> Result<QuizSession, SessionError> {
        let mut parts = token.trim().split('.');
        let (Some(version), Some(payload_hex), Some(signature_hex), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(SessionError::Malformed);
        };

        if version != TOKEN_VERSION {
            return Err(SessionError::UnsupportedVersion(version.to_string()));
        }

        let signature = decode_hex(signature_hex).ok_or(SessionError::Malformed)?;
        let mut mac = self.mac()?;
        mac.update(format!("{version}.{payload_hex}").as_bytes());
        mac.verify_slice(&signature).map_err(|_| SessionError::InvalidSignature)?;

        let payload = decode_hex(payload_hex).ok_or(SessionError::Malformed)?;
        let session: QuizSession = serde_json::from_slice(&payload)
            .map_err(|error| SessionError::Payload(error.to_string()))?;

        let expired_at = self.expires_at(&session)?;
        if now >= expired_at {
            return Err(SessionError::Expired { expired_at });
        }

        Ok(session)
    }

    fn mac(&self) -> Result<HmacSha256, SessionError> {
        HmacSha256::new_from_slice(self.signing_key.expose_secret().as_bytes())
            .map_err(|_| SessionError::EmptySigningKey)
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SessionError> {
        let mut mac = self.mac()?;
        mac.update(payload);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    let mut output = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        output.push_str(&format!("{byte:02x}"));
    }
    output
}

fn decode_hex(input: &str) -> Option<Vec<u8>> {
    if input.len() % 2 != 0 || !input.is_ascii() {
        return None;
    }

    (0..input.len())
        .step_by(2)
        .map(|index| u8::from_str_radix(input.get(index..index + 2)?, 16).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use secrecy::SecretString;

    use super::{decode_hex, encode_hex, SessionCodec, SessionError};
    use crate::config::SessionConfig;
    use crate::domain::quiz::QuizAnswer;

    fn codec() -> SessionCodec {
        SessionCodec::new(
            SecretString::from("test-signing-secret-with-enough-bytes"),
            Duration::hours(24),
        )
        .expect("codec")
    }

    fn answers() -> Vec<QuizAnswer> {
        vec![QuizAnswer::new("mood", "bold-mysterious"), QuizAnswer::new("notes", "smoky-woods")]
    }

    #[test]
    fn issued_token_opens_to_same_answers() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid timestamp");
        let (token, issued) = codec().issue(&answers(), now).expect("issue");

        let opened = codec().open(token.as_str(), now + Duration::minutes(5)).expect("open");
        assert_eq!(opened, issued);
        assert_eq!(opened.answers, answers());
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let now = Utc::now();
        let (token, _) = codec().issue(&answers(), now).expect("issue");

        let mut parts: Vec<String> = token.as_str().split('.').map(str::to_string).collect();
        let forged = br#"{"session_id":"00000000-0000-0000-0000-000000000000","issued_at":"2026-01-01T00:00:00Z","answers":[]}"#;
        parts[1] = encode_hex(forged);

        assert_eq!(codec().open(&parts.join("."), now), Err(SessionError::InvalidSignature));
    }

    #[test]
    fn token_from_another_key_is_rejected() {
        let now = Utc::now();
        let other = SessionCodec::new(SecretString::from("another-signing-secret"), Duration::hours(1))
            .expect("codec");
        let (token, _) = other.issue(&answers(), now).expect("issue");

        assert_eq!(codec().open(token.as_str(), now), Err(SessionError::InvalidSignature));
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now();
        let (token, session) = codec().issue(&answers(), now).expect("issue");

        let error = codec().open(token.as_str(), now + Duration::hours(25)).expect_err("expired");
        assert_eq!(error, SessionError::Expired { expired_at: session.issued_at + Duration::hours(24) });
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        let now = Utc::now();
        assert_eq!(codec().open("", now), Err(SessionError::Malformed));
        assert_eq!(codec().open("v1.abc", now), Err(SessionError::Malformed));
        assert_eq!(codec().open("v1.zz.zz", now), Err(SessionError::Malformed));
        assert_eq!(codec().open("v1.00.00.00", now), Err(SessionError::Malformed));
        assert_eq!(
            codec().open("v2.00.00", now),
            Err(SessionError::UnsupportedVersion("v2".to_string()))
        );
    }

    #[test]
    fn empty_signing_key_is_refused() {
        let result = SessionCodec::new(SecretString::from(""), Duration::hours(1));
        assert!(matches!(result, Err(SessionError::EmptySigningKey)));
    }

    #[test]
    fn out_of_range_ttl_is_refused() {
        let config = SessionConfig {
            signing_secret: SecretString::from("test-signing-secret-with-enough-bytes"),
            ttl_secs: u64::MAX,
        };
        assert!(matches!(
            SessionCodec::from_config(&config),
            Err(SessionError::InvalidTtl(u64::MAX))
        ));

        let config = SessionConfig { ttl_secs: i64::MAX as u64, ..config };
        assert!(matches!(
            SessionCodec::from_config(&config),
            Err(SessionError::InvalidTtl(_))
        ));
    }

    #[test]
    fn expiry_past_representable_range_is_rejected() {
        let unbounded = SessionCodec::new(
            SecretString::from("test-signing-secret-with-enough-bytes"),
            Duration::MAX,
        )
        .expect("codec");
        let now = Utc::now();
        assert_eq!(
            unbounded.issue(&answers(), now).map(|_| ()),
            Err(SessionError::ExpiryOutOfRange)
        );

        // A token minted under a shorter ttl still fails cleanly here.
        let (token, _) = codec().issue(&answers(), now).expect("issue");
        assert_eq!(unbounded.open(token.as_str(), now), Err(SessionError::ExpiryOutOfRange));
    }

    #[test]
    fn hex_helpers_round_trip() {
        assert_eq!(encode_hex(&[0x00, 0xab, 0xff]), "00abff");
        assert_eq!(decode_hex("00abff"), Some(vec![0x00, 0xab, 0xff]));
        assert_eq!(decode_hex("0"), None);
        assert_eq!(decode_hex("gg"), None);
    }
}
