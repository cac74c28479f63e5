//! Prediction errors.

use super::error_code::{self, CadenceErrorCode};

/// Errors raised while building predictors or running a prediction.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("not enough login data: {valid} usable logins, need {required}")]
    InsufficientData { valid: usize, required: usize },

    #[error("login history is empty")]
    EmptyHistory,

    #[error("malformed login timestamp {value:?}: {reason}")]
    MalformedTimestamp { value: String, reason: String },

    #[error("predicted timestamp is out of range: {details}")]
    TimestampOutOfRange { details: String },

    #[error("User not found with ID: {user_id}")]
    UserNotFound { user_id: String },
}

impl CadenceErrorCode for PredictionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
            Self::EmptyHistory => error_code::EMPTY_HISTORY,
            Self::MalformedTimestamp { .. } => error_code::MALFORMED_TIMESTAMP,
            Self::TimestampOutOfRange { .. } => error_code::TIMESTAMP_OUT_OF_RANGE,
            Self::UserNotFound { .. } => error_code::USER_NOT_FOUND,
        }
    }
}
