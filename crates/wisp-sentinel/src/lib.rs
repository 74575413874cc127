//! Named singleton sentinel values for wisp.
//!
//! A sentinel is a unique placeholder used to tell "no value provided" apart
//! from legitimate values such as null or an empty string. Sentinels are
//! interned by name: asking for the same name twice hands back the very same
//! allocation, so identity comparison is meaningful across the process.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, Mutex, OnceLock};

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

/// A named, process-wide singleton placeholder value.
///
/// Two sentinels with the same name are always the same interned entry:
///
/// ```
/// use wisp_sentinel::Sentinel;
///
/// let a = Sentinel::new("MISSING");
/// let b = Sentinel::new("MISSING");
/// assert!(a.is(&b));
/// assert_ne!(a, Sentinel::new("NO_VALUE"));
/// ```
#[derive(Clone)]
pub struct Sentinel(Arc<Inner>);

struct Inner {
    name: String,
}

fn intern_table() -> &'static Mutex<HashMap<String, Sentinel>> {
    static TABLE: OnceLock<Mutex<HashMap<String, Sentinel>>> = OnceLock::new();
    TABLE.get_or_init(|| Mutex::new(HashMap::new()))
}

impl Sentinel {
    /// Return the interned sentinel for `name`, creating it on first use.
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        let mut table = intern_table().lock().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = table.get(name) {
            return existing.clone();
        }
        let sentinel = Sentinel(Arc::new(Inner {
            name: name.to_string(),
        }));
        table.insert(name.to_string(), sentinel.clone());
        sentinel
    }

    /// The name the sentinel was interned under.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Identity comparison: do `self` and `other` share the interned entry?
    ///
    /// For sentinels obtained through [`Sentinel::new`] this coincides with
    /// name equality.
    pub fn is(&self, other: &Sentinel) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Shorthand for [`Sentinel::new`].
pub fn sentinel(name: impl AsRef<str>) -> Sentinel {
    Sentinel::new(name)
}

/// Well-known sentinel marking an absent value.
pub static MISSING: LazyLock<Sentinel> = LazyLock::new(|| Sentinel::new("MISSING"));

/// Well-known sentinel marking "no value supplied", distinct from [`MISSING`].
pub static NO_VALUE: LazyLock<Sentinel> = LazyLock::new(|| Sentinel::new("NO_VALUE"));

impl PartialEq for Sentinel {
    fn eq(&self, other: &Self) -> bool {
        // Interned entries make name equality and identity coincide.
        Arc::ptr_eq(&self.0, &other.0) || self.0.name == other.0.name
    }
}

impl Eq for Sentinel {}

impl std::hash::Hash for Sentinel {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Sentinel: {}>", self.0.name)
    }
}

impl fmt::Debug for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Sentinel: {}>", self.0.name)
    }
}

impl Serialize for Sentinel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.name)
    }
}

impl<'de> Deserialize<'de> for Sentinel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SentinelVisitor;

        impl Visitor<'_> for SentinelVisitor {
            type Value = Sentinel;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sentinel name string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Sentinel, E> {
                // Re-interning preserves identity across a round trip.
                Ok(Sentinel::new(value))
            }
        }

        deserializer.deserialize_str(SentinelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_is_same_entry() {
        let a = Sentinel::new("SAME");
        let b = Sentinel::new("SAME");
        assert!(a.is(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn different_names_differ() {
        let a = Sentinel::new("SAME");
        let b = Sentinel::new("DIFFERENT");
        assert!(!a.is(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn clone_preserves_identity() {
        let a = Sentinel::new("CLONED");
        let b = a.clone();
        assert!(a.is(&b));
    }

    #[test]
    fn display_format() {
        let s = Sentinel::new("MISSING");
        assert_eq!(s.to_string(), "<Sentinel: MISSING>");
        assert_eq!(format!("{s:?}"), "<Sentinel: MISSING>");
    }

    #[test]
    fn well_known_statics() {
        assert!(MISSING.is(&Sentinel::new("MISSING")));
        assert!(NO_VALUE.is(&Sentinel::new("NO_VALUE")));
        assert!(!MISSING.is(&NO_VALUE));
    }

    #[test]
    fn concurrent_interning_shares_one_entry() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| Sentinel::new("RACED")))
            .collect();
        let reference = Sentinel::new("RACED");
        for handle in handles {
            let interned = handle.join().unwrap();
            assert!(reference.is(&interned));
        }
    }

    #[test]
    fn name_round_trips() {
        assert_eq!(sentinel("abc").name(), "abc");
    }

    #[test]
    fn hashable_by_name() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Sentinel::new("A"));
        set.insert(Sentinel::new("A"));
        set.insert(Sentinel::new("B"));
        assert_eq!(set.len(), 2);
    }
}
