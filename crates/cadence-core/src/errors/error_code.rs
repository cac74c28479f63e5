//! Stable, machine-readable error codes.

/// Every Cadence error exposes a stable code for callers that branch on it.
pub trait CadenceErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const EMPTY_HISTORY: &str = "EMPTY_HISTORY";
pub const MALFORMED_TIMESTAMP: &str = "MALFORMED_TIMESTAMP";
pub const TIMESTAMP_OUT_OF_RANGE: &str = "TIMESTAMP_OUT_OF_RANGE";
pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PAYLOAD_ERROR: &str = "PAYLOAD_ERROR";
