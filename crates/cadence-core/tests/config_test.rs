use std::sync::Mutex;

use cadence_core::config::cadence_config::{
    ENV_DEFAULT_INTERVAL_HOURS, ENV_JSON_LOGS, ENV_LOG_LEVEL, ENV_SEED,
};
use cadence_core::config::*;
use cadence_core::errors::ConfigError;

/// Serializes tests that touch environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_cadence_env_vars() {
    for key in [ENV_SEED, ENV_DEFAULT_INTERVAL_HOURS, ENV_LOG_LEVEL, ENV_JSON_LOGS] {
        std::env::remove_var(key);
    }
}

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CadenceConfig::from_toml("").unwrap();

    assert_eq!(config.prediction.default_interval_hours, 24.0);
    assert_eq!(config.prediction.min_logins_for_prediction, 2);
    assert_eq!(config.prediction.min_logins_for_backtest, 3);
    assert_eq!(config.prediction.min_interval_hours, 1.0);
    assert_eq!(config.prediction.seed, None);

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[prediction]
seed = 7
default_interval_hours = 12.5

[observability]
json_logs = true
"#;
    let config = CadenceConfig::from_toml(toml).unwrap();
    assert_eq!(config.prediction.seed, Some(7));
    assert_eq!(config.prediction.default_interval_hours, 12.5);
    // Non-overridden fields keep defaults
    assert_eq!(config.prediction.min_logins_for_backtest, 3);
    assert!(config.observability.json_logs);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    match CadenceConfig::from_toml("this is not valid toml {{{{") {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("expected ParseError, got: {other:?}"),
    }
}

#[test]
fn validation_rejects_non_positive_interval() {
    let mut config = CadenceConfig::default();
    config.prediction.default_interval_hours = 0.0;
    match config.validate() {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "prediction.default_interval_hours");
        }
        other => panic!("expected ValidationFailed, got: {other:?}"),
    }
}

#[test]
fn validation_rejects_non_finite_and_oversized_intervals() {
    for (toml, field) in [
        ("[prediction]\nmin_interval_hours = inf", "prediction.min_interval_hours"),
        ("[prediction]\nmin_interval_hours = nan", "prediction.min_interval_hours"),
        ("[prediction]\ndefault_interval_hours = inf", "prediction.default_interval_hours"),
        ("[prediction]\ndefault_interval_hours = 1e12", "prediction.default_interval_hours"),
    ] {
        let config = CadenceConfig::from_toml(toml).unwrap();
        match config.validate() {
            Err(ConfigError::ValidationFailed { field: got, .. }) => assert_eq!(got, field, "{toml}"),
            other => panic!("expected ValidationFailed for {toml:?}, got: {other:?}"),
        }
    }

    let mut config = CadenceConfig::default();
    config.prediction.min_interval_hours = defaults::MAX_INTERVAL_HOURS;
    assert!(config.validate().is_ok());
}

#[test]
fn validation_rejects_backtest_threshold_not_above_prediction_threshold() {
    let mut config = CadenceConfig::default();
    config.prediction.min_logins_for_backtest = 2;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn load_reads_file_then_env() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_cadence_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("cadence.toml");
    std::fs::write(
        &path,
        r#"
[prediction]
seed = 1

[observability]
log_level = "warn"
"#,
    )
    .unwrap();

    std::env::set_var(ENV_SEED, "99");

    let config = CadenceConfig::load(Some(&path)).unwrap();
    // Env beats file
    assert_eq!(config.prediction.seed, Some(99));
    // File beats defaults
    assert_eq!(config.observability.log_level, "warn");

    clear_cadence_env_vars();
}

#[test]
fn load_ignores_unparseable_env_values() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_cadence_env_vars();

    std::env::set_var(ENV_JSON_LOGS, "sometimes");
    let config = CadenceConfig::load(None).unwrap();
    assert!(!config.observability.json_logs);

    clear_cadence_env_vars();
}

#[test]
fn load_missing_explicit_file_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_cadence_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let result = CadenceConfig::load(Some(&dir.path().join("missing.toml")));
    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}

#[test]
fn config_survives_toml_round_trip() {
    let mut config = CadenceConfig::default();
    config.prediction.seed = Some(2025);
    let rendered = config.to_toml().unwrap();
    assert_eq!(CadenceConfig::from_toml(&rendered).unwrap(), config);
}
