//! Error aggregator configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::errors::ConfigError;

/// Configuration for `ErrorAggregator::from_config`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Level at which each distinct error is logged. Default: `error`.
    pub log_level: Option<String>,
}

impl AggregatorConfig {
    pub const DEFAULT_LOG_LEVEL: Level = Level::ERROR;

    /// Returns the parsed log level, defaulting to ERROR.
    pub fn effective_level(&self) -> Result<Level, ConfigError> {
        match self.log_level.as_deref() {
            None => Ok(Self::DEFAULT_LOG_LEVEL),
            Some(raw) => Level::from_str(raw).map_err(|_| ConfigError::Invalid {
                field: "aggregator.log_level",
                message: format!("unknown level {raw:?}, expected trace|debug|info|warn|error"),
            }),
        }
    }
}
