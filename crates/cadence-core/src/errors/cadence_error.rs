//! Top-level error aggregating every subsystem error.

use super::error_code::{self, CadenceErrorCode};
use super::{ConfigError, PredictionError};

/// Top-level Cadence error. Subsystem errors convert via `From`.
#[derive(Debug, thiserror::Error)]
pub enum CadenceError {
    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid login payload: {reason}")]
    Payload { reason: String },
}

impl CadenceErrorCode for CadenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Prediction(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Payload { .. } => error_code::PAYLOAD_ERROR,
        }
    }
}

impl From<serde_json::Error> for CadenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload {
            reason: err.to_string(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type CadenceResult<T> = Result<T, CadenceError>;
