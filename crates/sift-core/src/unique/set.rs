//! Set of equivalence keys with novelty-reporting insertion.

use std::hash::Hash;

use crate::types::FxHashSet;

/// Keys seen so far.
#[derive(Debug, Clone)]
pub struct Set<K> {
    keys: FxHashSet<K>,
}

impl<K: Eq + Hash> Set<K> {
    pub fn new() -> Self {
        Self {
            keys: FxHashSet::default(),
        }
    }

    /// Add a key. Returns true if it was not already present.
    pub fn add(&mut self, key: K) -> bool {
        self.keys.insert(key)
    }

    pub fn has(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }
}

impl<K: Eq + Hash> Default for Set<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<K> for Set<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash> Extend<K> for Set<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.keys.extend(iter);
    }
}
