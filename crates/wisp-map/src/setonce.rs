//! Write-once maps: every key may be assigned exactly once.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Second assignment attempted for a key in a [`SetOnceMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError {
    key: String,
}

impl DuplicateKeyError {
    /// The offending key, as rendered at the time of the failed insert.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key {} already set in write-once map", self.key)
    }
}

impl std::error::Error for DuplicateKeyError {}

/// A map whose entries are immutable once written.
#[derive(Debug, Clone, Default)]
pub struct SetOnceMap<K, V> {
    inner: HashMap<K, V>,
}

impl<K: Eq + Hash + fmt::Debug, V> SetOnceMap<K, V> {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Assign `value` to `key`; fails if the key was ever assigned.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), DuplicateKeyError> {
        if self.inner.contains_key(&key) {
            return Err(DuplicateKeyError {
                key: format!("{key:?}"),
            });
        }
        self.inner.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.inner.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.inner.iter()
    }

    /// Unwrap into the underlying map, lifting the write-once restriction.
    pub fn into_inner(self) -> HashMap<K, V> {
        self.inner
    }
}
