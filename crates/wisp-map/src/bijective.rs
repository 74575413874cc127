//! One-to-one maps with an inverse index.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Rejected insertion into a [`BijectiveMap`], naming the colliding side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BijectiveError {
    /// The key is already paired with some value.
    KeyInUse,
    /// The value is already paired with some key.
    ValueInUse,
}

impl fmt::Display for BijectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BijectiveError::KeyInUse => write!(f, "key already paired in bijective map"),
            BijectiveError::ValueInUse => write!(f, "value already paired in bijective map"),
        }
    }
}

impl std::error::Error for BijectiveError {}

/// A one-to-one mapping: every key has exactly one value and vice versa.
///
/// The forward and inverse indexes always mirror each other; a rejected
/// insert leaves both untouched.
#[derive(Debug, Clone, Default)]
pub struct BijectiveMap<K, V> {
    forward: HashMap<K, V>,
    inverse: HashMap<V, K>,
}

impl<K, V> BijectiveMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            forward: HashMap::new(),
            inverse: HashMap::new(),
        }
    }

    /// Pair `key` with `value`, rejecting any collision on either side.
    ///
    /// Both sides are checked before either index is touched.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), BijectiveError> {
        if self.forward.contains_key(&key) {
            return Err(BijectiveError::KeyInUse);
        }
        if self.inverse.contains_key(&value) {
            return Err(BijectiveError::ValueInUse);
        }
        self.forward.insert(key.clone(), value.clone());
        self.inverse.insert(value, key);
        Ok(())
    }

    /// Pair `key` with `value`, evicting any stale pairings on both sides.
    ///
    /// Returns the value previously paired with `key` and the key
    /// previously paired with `value`, when present.
    pub fn insert_overwrite(&mut self, key: K, value: V) -> (Option<V>, Option<K>) {
        let old_value = self.remove_by_key(&key);
        let old_key = self.remove_by_value(&value);
        self.forward.insert(key.clone(), value.clone());
        self.inverse.insert(value, key);
        (old_value, old_key)
    }

    pub fn get_by_key(&self, key: &K) -> Option<&V> {
        self.forward.get(key)
    }

    pub fn get_by_value(&self, value: &V) -> Option<&K> {
        self.inverse.get(value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }

    pub fn contains_value(&self, value: &V) -> bool {
        self.inverse.contains_key(value)
    }

    /// Remove a pairing by key, returning the evicted value.
    pub fn remove_by_key(&mut self, key: &K) -> Option<V> {
        let value = self.forward.remove(key)?;
        self.inverse.remove(&value);
        Some(value)
    }

    /// Remove a pairing by value, returning the evicted key.
    pub fn remove_by_value(&mut self, value: &V) -> Option<K> {
        let key = self.inverse.remove(value)?;
        self.forward.remove(&key);
        Some(key)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Key/value pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.forward.iter()
    }

    /// Value/key pairs in arbitrary order.
    pub fn inverse(&self) -> impl Iterator<Item = (&V, &K)> {
        self.inverse.iter()
    }
}
