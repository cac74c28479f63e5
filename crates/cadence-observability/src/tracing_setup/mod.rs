//! Structured logging via `tracing-subscriber`.

pub mod spans;

use cadence_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Build the `EnvFilter` for a config. `RUST_LOG` wins when set; an invalid
/// directive falls back to `info`.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(true);

    let installed = if config.json_logs {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.log_level, json = config.json_logs, "tracing initialized");
    }
    installed
}
