//! Error types for the pinpost CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::extract::ExtractError;
use crate::model::ModelError;
use crate::publish::PublishError;
use thiserror::Error;

/// Main error type for pinpost operations.
///
/// Each variant maps to a specific exit code so scripts can tell a malformed
/// model reply apart from an unreachable service or a Pinboard rejection.
#[derive(Error, Debug)]
pub enum PinpostError {
    /// User provided invalid arguments or configuration is incomplete.
    #[error("{0}")]
    User(String),

    /// The model reply could not be turned into a valid bookmark.
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    /// The model or Pinboard service itself failed (network, auth, rate limit).
    #[error("{0}")]
    ExternalCall(String),

    /// Pinboard answered but refused to save the bookmark.
    #[error("Pinboard rejected the bookmark: {0}")]
    PublishRejected(String),
}

impl PinpostError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PinpostError::User(_) => exit_codes::USER_ERROR,
            PinpostError::Extraction(_) => exit_codes::EXTRACTION_FAILURE,
            PinpostError::ExternalCall(_) => exit_codes::EXTERNAL_FAILURE,
            PinpostError::PublishRejected(_) => exit_codes::PUBLISH_REJECTED,
        }
    }
}

impl From<ModelError> for PinpostError {
    fn from(err: ModelError) -> Self {
        PinpostError::ExternalCall(err.to_string())
    }
}

impl From<PublishError> for PinpostError {
    fn from(err: PublishError) -> Self {
        match err {
            PublishError::Rejected(code) => PinpostError::PublishRejected(code),
            PublishError::Transport(msg) => PinpostError::ExternalCall(msg),
        }
    }
}

/// Result type alias for pinpost operations.
pub type Result<T> = std::result::Result<T, PinpostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PinpostError::User("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn extraction_error_has_correct_exit_code() {
        let err = PinpostError::Extraction(ExtractError::Schema {
            field: "title",
            raw: "{}".to_string(),
        });
        assert_eq!(err.exit_code(), exit_codes::EXTRACTION_FAILURE);
    }

    #[test]
    fn external_call_error_has_correct_exit_code() {
        let err = PinpostError::ExternalCall("connection refused".to_string());
        assert_eq!(err.exit_code(), exit_codes::EXTERNAL_FAILURE);
    }

    #[test]
    fn publish_rejected_has_correct_exit_code() {
        let err = PinpostError::PublishRejected("missing url".to_string());
        assert_eq!(err.exit_code(), exit_codes::PUBLISH_REJECTED);
    }

    #[test]
    fn publish_error_variants_map_to_distinct_codes() {
        let rejected: PinpostError = PublishError::Rejected("item already exists".to_string()).into();
        let transport: PinpostError = PublishError::Transport("timed out".to_string()).into();
        assert_eq!(rejected.exit_code(), exit_codes::PUBLISH_REJECTED);
        assert_eq!(transport.exit_code(), exit_codes::EXTERNAL_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PinpostError::User("PINBOARD_API_TOKEN not set".to_string());
        assert_eq!(err.to_string(), "PINBOARD_API_TOKEN not set");

        let err = PinpostError::PublishRejected("must provide title".to_string());
        assert_eq!(
            err.to_string(),
            "Pinboard rejected the bookmark: must provide title"
        );
    }
}
