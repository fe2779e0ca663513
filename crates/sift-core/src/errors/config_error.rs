//! Configuration errors.

use std::path::PathBuf;

use super::error_code::{self, SiftErrorCode};

/// Errors raised while loading, validating or serializing a `SiftConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error in {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("Cannot serialize config: {0}")]
    Serialize(String),

    #[error("Invalid value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

impl SiftErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
