//! Incrementally built unique list.

use std::fmt;
use std::hash::Hash;

use super::dedup::same;
use super::set::Set;

/// An ordered list that silently drops elements whose key was already seen.
///
/// Not safe for concurrent writers; wrap it in a lock if it must be shared.
#[derive(Clone)]
pub struct List<T, K, F = fn(&T) -> K> {
    items: Vec<T>,
    seen: Set<K>,
    key: F,
}

impl<T: Clone + Eq + Hash> List<T, T> {
    /// A list where each element is its own key.
    pub fn new() -> Self {
        Self::with_key(same::<T> as fn(&T) -> T)
    }
}

impl<T: Clone + Eq + Hash> Default for List<T, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K, F> List<T, K, F>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    /// A list deduplicated by `key`.
    pub fn with_key(key: F) -> Self {
        Self {
            items: Vec::new(),
            seen: Set::new(),
            key,
        }
    }

    /// Append `item` if its key is new. Returns true if it was appended.
    pub fn push(&mut self, item: T) -> bool {
        let novel = self.seen.add((self.key)(&item));
        if novel {
            self.items.push(item);
        }
        novel
    }

    /// Append each of `items` whose key is new, in order.
    pub fn append<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push(item);
        }
    }

    /// True if an element with this key has been appended.
    pub fn contains_key(&self, key: &K) -> bool {
        self.seen.has(key)
    }
}

impl<T, K, F> List<T, K, F> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, K, F> Extend<T> for List<T, K, F>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<T, K, F> IntoIterator for List<T, K, F> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, K, F> IntoIterator for &'a List<T, K, F> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug, K, F> fmt::Debug for List<T, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}
