//! Set of distinct errors keyed by their message.

use std::fmt;

use super::list::List;
use crate::errors::CombinedError;

fn message_key<E: fmt::Display>(err: &E) -> String {
    err.to_string()
}

/// Distinct errors in first-recorded order.
///
/// Two errors are the same if their `Display` text is equal.
#[derive(Clone)]
pub struct Errors<E> {
    list: List<E, String>,
}

impl<E: fmt::Display> Errors<E> {
    pub fn new() -> Self {
        Self {
            list: List::with_key(message_key::<E> as fn(&E) -> String),
        }
    }

    /// Record `err` if present and not yet seen.
    /// Returns true only for a newly recorded error; `None` is never novel.
    pub fn add(&mut self, err: Option<E>) -> bool {
        match err {
            Some(err) => self.insert(err),
            None => false,
        }
    }

    /// Record `err` if not yet seen. Returns true if it was new.
    pub fn insert(&mut self, err: E) -> bool {
        self.list.push(err)
    }
}

impl<E> Errors<E> {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Number of distinct errors.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.list.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        self.list.as_slice()
    }

    /// The combined error, or `None` if nothing was recorded.
    pub fn err(&self) -> Option<CombinedError<E>>
    where
        E: Clone,
    {
        CombinedError::new(self.list.as_slice().to_vec())
    }

    pub fn into_err(self) -> Option<CombinedError<E>> {
        CombinedError::new(self.list.into_vec())
    }
}

impl<E: fmt::Display> Default for Errors<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for Errors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Errors").field(&self.list).finish()
    }
}
