//! Partial failure: some units of work succeeded, some failed.

use std::error::Error;

use super::combined_error::CombinedError;
use super::error_code::{self, SiftErrorCode};

/// Result of a run where at least one unit succeeded and at least one
/// distinct error was recorded. The recorded errors are the `source`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("partial result: {source}")]
pub struct PartialError<E>
where
    E: Error + 'static,
{
    source: CombinedError<E>,
}

impl<E> PartialError<E>
where
    E: Error + 'static,
{
    pub fn new(source: CombinedError<E>) -> Self {
        Self { source }
    }

    /// The distinct errors behind this partial result.
    pub fn combined(&self) -> &CombinedError<E> {
        &self.source
    }

    pub fn into_combined(self) -> CombinedError<E> {
        self.source
    }
}

impl<E> SiftErrorCode for PartialError<E>
where
    E: Error + 'static,
{
    fn error_code(&self) -> &'static str {
        error_code::PARTIAL_FAILURE
    }
}
