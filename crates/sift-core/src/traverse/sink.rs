//! Where distinct errors are logged when they are first recorded.

use std::error::Error;
use std::fmt;

use tracing::Level;

use crate::tracing::fields;

/// A key/value pair of context attached to a report.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub key: &'a str,
    pub value: &'a dyn fmt::Display,
}

impl<'a> Field<'a> {
    pub fn new(key: &'a str, value: &'a dyn fmt::Display) -> Self {
        Self { key, value }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Renders fields as space-separated `key=value` pairs.
pub struct DisplayFields<'a>(pub &'a [Field<'a>]);

impl fmt::Display for DisplayFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", field.key, field.value)?;
        }
        Ok(())
    }
}

/// Receives each distinct error once, at the moment it is first recorded.
///
/// Called while the aggregator lock is held, so implementations must be
/// fast and must not report back into the same aggregator.
pub trait ErrorSink: Send + Sync {
    fn on_error(&self, error: &(dyn Error + 'static), message: &str, fields: &[Field<'_>]);
}

/// Emits one `tracing` event per distinct error.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: Level,
}

impl TracingSink {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(Level::ERROR)
    }
}

// `tracing::event!` needs a constant level, hence one arm per level.
macro_rules! emit {
    ($level:expr, $error:expr, $message:expr, $fields:expr) => {
        tracing::event!(
            target: crate::traverse::TARGET,
            $level,
            { fields::ERROR } = %$error,
            { fields::CONTEXT } = %DisplayFields($fields),
            "{}",
            $message
        )
    };
}

impl ErrorSink for TracingSink {
    fn on_error(&self, error: &(dyn Error + 'static), message: &str, fields: &[Field<'_>]) {
        match self.level {
            Level::TRACE => emit!(Level::TRACE, error, message, fields),
            Level::DEBUG => emit!(Level::DEBUG, error, message, fields),
            Level::INFO => emit!(Level::INFO, error, message, fields),
            Level::WARN => emit!(Level::WARN, error, message, fields),
            _ => emit!(Level::ERROR, error, message, fields),
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ErrorSink for NoopSink {
    fn on_error(&self, _error: &(dyn Error + 'static), _message: &str, _fields: &[Field<'_>]) {}
}
