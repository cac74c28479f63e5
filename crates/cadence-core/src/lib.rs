//! # cadence-core
//!
//! Foundation crate for the Cadence login prediction engine.
//! Defines the login history model, the predictor contract, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CadenceConfig;
pub use errors::{CadenceError, CadenceResult};
pub use models::{LoginCluster, LoginHistory, PredictorKind};
pub use traits::ILoginPredictor;
