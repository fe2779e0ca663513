//! Classified outcome of a run with at least one recorded error.

use std::error::Error;

use super::combined_error::CombinedError;
use super::error_code::SiftErrorCode;
use super::partial_error::PartialError;

/// A failed or partially failed run.
///
/// `Failed` means no unit of work succeeded; `Partial` means some did.
/// A run with no recorded errors is not a `TraverseError` at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraverseError<E>
where
    E: Error + 'static,
{
    #[error(transparent)]
    Failed(CombinedError<E>),

    #[error(transparent)]
    Partial(#[from] PartialError<E>),
}

impl<E> TraverseError<E>
where
    E: Error + 'static,
{
    /// Classify recorded errors by whether any unit succeeded.
    pub fn classify(errors: CombinedError<E>, successes: usize) -> Self {
        if successes > 0 {
            Self::Partial(PartialError::new(errors))
        } else {
            Self::Failed(errors)
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }

    /// The distinct errors, regardless of classification.
    pub fn combined(&self) -> &CombinedError<E> {
        match self {
            Self::Failed(errors) => errors,
            Self::Partial(partial) => partial.combined(),
        }
    }

    pub fn into_combined(self) -> CombinedError<E> {
        match self {
            Self::Failed(errors) => errors,
            Self::Partial(partial) => partial.into_combined(),
        }
    }
}

impl<E> SiftErrorCode for TraverseError<E>
where
    E: Error + 'static,
{
    fn error_code(&self) -> &'static str {
        match self {
            Self::Failed(e) => e.error_code(),
            Self::Partial(e) => e.error_code(),
        }
    }
}
