//! Insert-only keyed registry with an explicit overwrite policy.
//!
//! A `Registry` maps string keys to entries in insertion order. By default a
//! key may only be registered once; registries built with
//! [`Registry::allow_overwrite`] instead hand the evicted entry back to the
//! caller.

use std::fmt;

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Registration attempted with an empty key.
    EmptyKey,
    /// Key already present in an insert-only registry.
    Duplicate { key: String },
    /// Lookup failed.
    NotFound { key: String, registry: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::EmptyKey => write!(f, "registry key must not be empty"),
            RegistryError::Duplicate { key } => {
                write!(f, "key {key:?} already present in insert-only registry")
            }
            RegistryError::NotFound { key, registry } => {
                write!(f, "no key {key:?} in registry {registry:?}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered mapping of string keys to entries.
pub struct Registry<T> {
    name: String,
    insert_only: bool,
    entries: Vec<(String, T)>,
}

impl<T> Registry<T> {
    /// New insert-only registry with the given name (used in error messages).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            insert_only: true,
            entries: Vec::new(),
        }
    }

    /// Permit re-registration of existing keys; [`Registry::register`] then
    /// returns the evicted entry.
    pub fn allow_overwrite(mut self) -> Self {
        self.insert_only = false;
        self
    }

    /// The registry's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register `value` under `key`.
    ///
    /// Returns the previously registered entry when overwriting is allowed
    /// and the key was present. Empty keys are rejected; so are duplicates
    /// in an insert-only registry.
    pub fn register(&mut self, key: impl Into<String>, value: T) -> Result<Option<T>, RegistryError> {
        let key = key.into();
        if key.is_empty() {
            return Err(RegistryError::EmptyKey);
        }
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            if self.insert_only {
                return Err(RegistryError::Duplicate { key });
            }
            let prior = std::mem::replace(&mut slot.1, value);
            return Ok(Some(prior));
        }
        self.entries.push((key, value));
        Ok(None)
    }

    /// Look up an entry, or `None`.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up an entry, or an error naming the key and registry.
    pub fn try_get(&self, key: &str) -> Result<&T, RegistryError> {
        self.get(key).ok_or_else(|| RegistryError::NotFound {
            key: key.to_string(),
            registry: self.name.clone(),
        })
    }

    /// Whether the key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Key/entry pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("insert_only", &self.insert_only)
            .field("len", &self.entries.len())
            .finish()
    }
}
