//! Tests for the Sift configuration system.

use std::sync::Mutex;

use sift_core::config::{AggregatorConfig, SiftConfig};
use sift_core::errors::ConfigError;
use sift_core::ErrorAggregator;
use tracing::Level;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all SIFT_ env vars to prevent cross-test contamination.
fn clear_sift_env_vars() {
    for key in [
        "SIFT_LOG_FILTER",
        "SIFT_LOG_THREAD_IDS",
        "SIFT_LOG_FILE_LINES",
        "SIFT_AGGREGATOR_LOG_LEVEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_defaults() {
    let config = SiftConfig::default();
    assert_eq!(config.logging.effective_filter(), "sift=info");
    assert!(config.logging.effective_thread_ids());
    assert!(!config.logging.effective_file_lines());
    assert_eq!(config.aggregator.effective_level().unwrap(), Level::ERROR);
}

#[test]
fn test_project_file_then_env() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sift_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("sift.toml"),
        r#"
[logging]
filter = "sift::traverse=debug"
file_lines = true

[aggregator]
log_level = "warn"
"#,
    )
    .unwrap();

    let config = SiftConfig::load(dir.path()).unwrap();
    assert_eq!(config.logging.effective_filter(), "sift::traverse=debug");
    assert!(config.logging.effective_file_lines());
    assert_eq!(config.aggregator.effective_level().unwrap(), Level::WARN);

    std::env::set_var("SIFT_AGGREGATOR_LOG_LEVEL", "info");
    std::env::set_var("SIFT_LOG_THREAD_IDS", "false");
    let config = SiftConfig::load(dir.path()).unwrap();
    assert_eq!(config.aggregator.effective_level().unwrap(), Level::INFO);
    assert!(!config.logging.effective_thread_ids());
    // Untouched by env, still from the project file.
    assert_eq!(config.logging.effective_filter(), "sift::traverse=debug");

    clear_sift_env_vars();
}

#[test]
fn test_missing_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sift_env_vars();

    let dir = tempdir();
    let config = SiftConfig::load(dir.path()).unwrap();
    assert!(config.aggregator.log_level.is_none());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sift_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("sift.toml"), "[aggregator\nlog_level = ").unwrap();
    let err = SiftConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_unreadable_project_file_is_read_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sift_env_vars();

    // A directory where the config file should be exists but cannot be read.
    let dir = tempdir();
    let config_path = dir.path().join("sift.toml");
    std::fs::create_dir(&config_path).unwrap();

    match SiftConfig::load(dir.path()).unwrap_err() {
        ConfigError::Read { path, .. } => assert_eq!(path, config_path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn test_invalid_level_rejected() {
    let err = SiftConfig::from_toml("[aggregator]\nlog_level = \"loud\"\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid { field: "aggregator.log_level", .. }
    ));

    let config = AggregatorConfig {
        log_level: Some("loud".into()),
    };
    assert!(ErrorAggregator::<std::io::Error>::from_config(&config).is_err());
}

#[test]
fn test_empty_filter_rejected() {
    let err = SiftConfig::from_toml("[logging]\nfilter = \"  \"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "logging.filter", .. }));
}

#[test]
fn test_toml_roundtrip_preserves_values() {
    let config = SiftConfig::from_toml("[aggregator]\nlog_level = \"debug\"\n").unwrap();
    let back = SiftConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(back.aggregator.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_aggregator_from_config() {
    let config = AggregatorConfig {
        log_level: Some("warn".into()),
    };
    let agg = ErrorAggregator::<std::io::Error>::from_config(&config).unwrap();
    agg.success();
    assert!(agg.finish().is_ok());
}
