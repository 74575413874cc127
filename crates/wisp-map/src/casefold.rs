//! Case-insensitive string-keyed maps.

use std::collections::HashMap;

/// String-keyed map that folds keys to lowercase on every access, while
/// iteration reports the spelling used when the key was first inserted.
#[derive(Debug, Clone, Default)]
pub struct CaseFoldMap<V> {
    // folded key -> (first-seen spelling, value)
    inner: HashMap<String, (String, V)>,
}

impl<V> CaseFoldMap<V> {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Insert or update; returns the replaced value, if any.
    ///
    /// Updates keep the spelling recorded by the first insert.
    pub fn insert(&mut self, key: impl AsRef<str>, value: V) -> Option<V> {
        let key = key.as_ref();
        let folded = key.to_lowercase();
        match self.inner.get_mut(&folded) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.inner.insert(folded, (key.to_string(), value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.inner.get(&key.to_lowercase()).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(&key.to_lowercase())
    }

    /// Remove an entry, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.inner.remove(&key.to_lowercase()).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Keys as first-seen spellings, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.values().map(|(spelling, _)| spelling.as_str())
    }

    /// (first-seen spelling, value) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.inner
            .values()
            .map(|(spelling, value)| (spelling.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let mut map = CaseFoldMap::new();
        map.insert("Content-Type", "json");

        assert_eq!(map.get("content-type"), Some(&"json"));
        assert_eq!(map.get("CONTENT-TYPE"), Some(&"json"));
        assert!(map.contains_key("Content-type"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn update_keeps_first_spelling() {
        let mut map = CaseFoldMap::new();
        assert_eq!(map.insert("Accept", 1), None);
        assert_eq!(map.insert("ACCEPT", 2), Some(1));

        assert_eq!(map.get("accept"), Some(&2));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["Accept"]);
    }

    #[test]
    fn remove_ignores_case() {
        let mut map = CaseFoldMap::new();
        map.insert("Key", 5);
        assert_eq!(map.remove("kEy"), Some(5));
        assert!(map.is_empty());
    }
}
