//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SIFT_LOG";

/// Initialize the Sift tracing/logging system with default settings.
///
/// Reads `SIFT_LOG` for per-target log levels, e.g.
/// `SIFT_LOG=sift::traverse=debug`. Falls back to `sift=info` if `SIFT_LOG`
/// is not set or is invalid.
///
/// Idempotent: only the first call (of this or `init_tracing_with`) installs
/// a subscriber, and it does nothing if the host already installed one.
pub fn init_tracing() {
    init_tracing_with(&LoggingConfig::default());
}

/// Pick the filter directives to install: `env` if it parses, else the
/// configured filter if it parses, else `sift=info`.
pub fn filter_directives(env: Option<&str>, config: &LoggingConfig) -> String {
    env.into_iter()
        .chain(std::iter::once(config.effective_filter()))
        .find(|directives| EnvFilter::try_new(directives).is_ok())
        .unwrap_or(LoggingConfig::DEFAULT_FILTER)
        .to_string()
}

/// Initialize tracing from a `LoggingConfig`. `SIFT_LOG` still takes
/// precedence over the configured filter.
pub fn init_tracing_with(config: &LoggingConfig) {
    INIT.call_once(|| {
        let env = std::env::var(LOG_ENV).ok();
        let filter = EnvFilter::new(filter_directives(env.as_deref(), config));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(config.effective_thread_ids())
                    .with_file(config.effective_file_lines())
                    .with_line_number(config.effective_file_lines()),
            )
            .with(filter)
            .try_init();
    });
}
