//! # cadence-observability
//!
//! Tracing subscriber setup driven by [`ObservabilityConfig`] and the span
//! macros used by the prediction engine.
//!
//! [`ObservabilityConfig`]: cadence_core::config::ObservabilityConfig

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing};
