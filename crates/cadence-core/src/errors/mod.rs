//! Error handling for Cadence.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod cadence_error;
pub mod config_error;
pub mod error_code;
pub mod prediction_error;

pub use cadence_error::{CadenceError, CadenceResult};
pub use config_error::ConfigError;
pub use error_code::CadenceErrorCode;
pub use prediction_error::PredictionError;
