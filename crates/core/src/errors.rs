use thiserror::Error;

use crate::session::SessionError;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown quiz question `{0}`")]
    UnknownQuestion(String),
    #[error("unknown option `{option}` for quiz question `{question}`")]
    UnknownOption { question: String, option: String },
    #[error("quiz question `{0}` was answered more than once")]
    DuplicateAnswer(String),
    #[error("answer weight for quiz question `{question}` must be finite and non-negative")]
    InvalidWeight { question: String },
    #[error("quiz is already complete")]
    QuizComplete,
    #[error("no answers were provided")]
    EmptyAnswers,
    #[error("unknown product `{0}`")]
    UnknownProduct(String),
    #[error("unknown collection `{0}`")]
    UnknownCollection(String),
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("session rejected: {message}")]
    SessionRejected { message: String, correlation_id: String },
    #[error("not found: {message}")]
    NotFound { message: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => {
                "Some of the submitted values were not recognised. Check them and try again."
            }
            Self::SessionRejected { .. } => {
                "Your quiz session could not be restored. Please take the quiz again."
            }
            Self::NotFound { .. } => "We could not find what you were looking for.",
            Self::Internal { .. } => "An unexpected internal error occurred.",
        }
    }

    pub fn correlation_id(&self) -> &str {
        match self {
            Self::BadRequest { correlation_id, .. }
            | Self::SessionRejected { correlation_id, .. }
            | Self::NotFound { correlation_id, .. }
            | Self::Internal { correlation_id, .. } => correlation_id,
        }
    }

    /// Whether the caller should send the user back to the start of the quiz.
    pub fn requires_quiz_restart(&self) -> bool {
        matches!(self, Self::SessionRejected { .. })
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::SessionRejected { correlation_id: id, .. }
            | InterfaceError::NotFound { correlation_id: id, .. }
            | InterfaceError::Internal { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        let unassigned = || "unassigned".to_owned();
        match value {
            ApplicationError::Domain(
                error @ (DomainError::UnknownProduct(_) | DomainError::UnknownCollection(_)),
            ) => Self::NotFound { message: error.to_string(), correlation_id: unassigned() },
            ApplicationError::Domain(DomainError::InvariantViolation(message)) => {
                Self::Internal { message, correlation_id: unassigned() }
            }
            ApplicationError::Domain(error) => {
                Self::BadRequest { message: error.to_string(), correlation_id: unassigned() }
            }
            ApplicationError::Session(error) => {
                Self::SessionRejected { message: error.to_string(), correlation_id: unassigned() }
            }
            ApplicationError::Configuration(message) => {
                Self::Internal { message, correlation_id: unassigned() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{ApplicationError, DomainError, InterfaceError};
    use crate::session::SessionError;

    #[test]
    fn unknown_option_maps_to_bad_request_interface_error() {
        let interface = ApplicationError::from(DomainError::UnknownOption {
            question: "mood".to_owned(),
            option: "sleepy".to_owned(),
        })
        .into_interface("req-1");

        assert!(matches!(
            interface,
            InterfaceError::BadRequest {
                ref correlation_id,
                ..
            } if correlation_id == "req-1"
        ));
        assert!(!interface.requires_quiz_restart());
    }

    #[test]
    fn session_errors_ask_for_quiz_restart() {
        let interface = ApplicationError::from(SessionError::InvalidSignature).into_interface("req-2");

        assert!(matches!(interface, InterfaceError::SessionRejected { .. }));
        assert!(interface.requires_quiz_restart());
        assert_eq!(
            interface.user_message(),
            "Your quiz session could not be restored. Please take the quiz again."
        );
    }

    #[test]
    fn unknown_product_maps_to_not_found() {
        let interface = ApplicationError::from(DomainError::UnknownProduct("nope".to_owned()))
            .into_interface("req-3");

        assert!(matches!(interface, InterfaceError::NotFound { .. }));
        assert_eq!(interface.correlation_id(), "req-3");
    }

    #[test]
    fn configuration_error_maps_to_internal() {
        let interface = ApplicationError::Configuration("missing signing secret".to_owned())
            .into_interface("req-4");

        assert!(matches!(interface, InterfaceError::Internal { .. }));
        assert_eq!(interface.user_message(), "An unexpected internal error occurred.");
    }
}
