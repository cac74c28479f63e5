//! Configuration system for Cadence.
//! TOML-based, 3-layer resolution: env > file > compiled defaults.

pub mod cadence_config;
pub mod defaults;
pub mod observability_config;
pub mod prediction_config;

pub use cadence_config::CadenceConfig;
pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;
