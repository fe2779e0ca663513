//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the tracing subscriber installed by `init_tracing_with`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives. Default: `sift=info`.
    pub filter: Option<String>,
    /// Include thread ids in log lines. Default: true.
    pub thread_ids: Option<bool>,
    /// Include source file and line in log lines. Default: false.
    pub file_lines: Option<bool>,
}

impl LoggingConfig {
    pub const DEFAULT_FILTER: &'static str = "sift=info";

    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(Self::DEFAULT_FILTER)
    }

    pub fn effective_thread_ids(&self) -> bool {
        self.thread_ids.unwrap_or(true)
    }

    pub fn effective_file_lines(&self) -> bool {
        self.file_lines.unwrap_or(false)
    }
}
