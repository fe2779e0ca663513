//! Top-level Sift configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AggregatorConfig, LoggingConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "sift.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SIFT_*`)
/// 2. Project config (`sift.toml` in project root)
/// 3. User config (`~/.sift/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiftConfig {
    pub logging: LoggingConfig,
    pub aggregator: AggregatorConfig,
}

impl SiftConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. An unreadable user file is skipped,
        // a malformed one is fatal.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) | Err(ConfigError::Read { .. }) => {}
                    Err(e) => return Err(e),
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            origin: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SiftConfig) -> Result<(), ConfigError> {
        if let Some(filter) = &config.logging.filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field: "logging.filter",
                    message: "must not be empty".to_string(),
                });
            }
        }
        config.aggregator.effective_level()?;
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Returns the user config path: `~/.sift/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".sift").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut SiftConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file_config: SiftConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                origin: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` override.
    fn merge(base: &mut SiftConfig, other: SiftConfig) {
        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter;
        }
        if other.logging.thread_ids.is_some() {
            base.logging.thread_ids = other.logging.thread_ids;
        }
        if other.logging.file_lines.is_some() {
            base.logging.file_lines = other.logging.file_lines;
        }
        if other.aggregator.log_level.is_some() {
            base.aggregator.log_level = other.aggregator.log_level;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SIFT_LOG_FILTER`, `SIFT_AGGREGATOR_LOG_LEVEL`, etc.
    fn apply_env_overrides(config: &mut SiftConfig) {
        if let Ok(val) = std::env::var("SIFT_LOG_FILTER") {
            config.logging.filter = Some(val);
        }
        if let Ok(val) = std::env::var("SIFT_LOG_THREAD_IDS") {
            if let Ok(v) = val.parse::<bool>() {
                config.logging.thread_ids = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIFT_LOG_FILE_LINES") {
            if let Ok(v) = val.parse::<bool>() {
                config.logging.file_lines = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIFT_AGGREGATOR_LOG_LEVEL") {
            config.aggregator.log_level = Some(val);
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
