//! One-shot deduplication of ordered sequences.
//!
//! `copy` and `in_place` take `Option` input so callers can distinguish an
//! absent sequence from a present one: `copy` normalizes both absent and
//! empty input to `None`, while `in_place` keeps a present-but-empty vector
//! present.

use std::hash::Hash;

use super::set::Set;

/// Identity key: every element is its own equivalence key.
pub fn same<T: Clone>(item: &T) -> T {
    item.clone()
}

/// Copy the unique elements of `input` into a new vector.
///
/// Returns `None` if `input` is absent or empty. `input` is not modified.
pub fn copy<T, K, F>(input: Option<&[T]>, mut key: F) -> Option<Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let input = input.filter(|items| !items.is_empty())?;
    let mut seen = Set::new();
    let output = input
        .iter()
        .filter(|&item| seen.add(key(item)))
        .cloned()
        .collect();
    Some(output)
}

/// Compact `items` so it holds only the first element for each key.
pub fn dedup_by_key<T, K, F>(items: &mut Vec<T>, mut key: F)
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = Set::new();
    items.retain(|item| seen.add(key(item)));
}

/// Deduplicate `input` in place and return a view of the unique elements.
///
/// An absent input stays absent; a present empty vector yields an empty
/// slice.
pub fn in_place<T, K, F>(input: Option<&mut Vec<T>>, key: F) -> Option<&[T]>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let items = input?;
    dedup_by_key(items, key);
    Some(items.as_slice())
}
