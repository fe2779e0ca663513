//! The combined value of every distinct error recorded in a run.

use std::error::Error;
use std::fmt;

use super::error_code::{self, SiftErrorCode};

/// Distinct errors in the order they were first recorded.
///
/// Never empty: it is only constructed from a non-empty set of errors.
/// Displays as the individual messages joined by newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedError<E> {
    errors: Vec<E>,
}

impl<E> CombinedError<E> {
    /// Wrap a list of distinct errors. Returns `None` for an empty list.
    pub fn new(errors: Vec<E>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// The distinct errors, in first-recorded order.
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Number of distinct errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<E> {
        self.errors
    }
}

impl<E: fmt::Display> fmt::Display for CombinedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl<E: Error + 'static> Error for CombinedError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.errors.first().map(|e| e as &(dyn Error + 'static))
    }
}

impl<E> SiftErrorCode for CombinedError<E> {
    fn error_code(&self) -> &'static str {
        error_code::TRAVERSE_FAILED
    }
}

impl<E> IntoIterator for CombinedError<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a CombinedError<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
