//! JSON serialization helpers for wisp.
//!
//! Two layers: thin convenience wrappers around `serde_json`/`serde_yaml`
//! for anything deriving `Serialize`/`Deserialize`, and a tagged encoding
//! (see [`rich`]) for values JSON cannot represent natively: binary data,
//! dates and times, durations, ranges, decimals and sets.

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub mod rich;

pub use rich::{Codec, CodecRegistry, Rich, RichError};

/// Serialize to a compact JSON string.
pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string(value).context("JSON serialization failed")
}

/// Serialize to an indented JSON string.
pub fn to_json_pretty<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("JSON serialization failed")
}

/// Deserialize from a JSON string.
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> anyhow::Result<T> {
    serde_json::from_str(json).context("JSON deserialization failed")
}

/// Serialize to a YAML string.
pub fn to_yaml<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_yaml::to_string(value).context("YAML serialization failed")
}

/// Deserialize from a YAML string.
pub fn from_yaml<T: for<'de> Deserialize<'de>>(yaml: &str) -> anyhow::Result<T> {
    serde_yaml::from_str(yaml).context("YAML deserialization failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        value: i32,
    }

    #[test]
    fn json_round_trip() {
        let original = Sample {
            name: "test".to_string(),
            value: 42,
        };
        let json = to_json(&original).unwrap();
        let restored: Sample = from_json(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn pretty_json_is_indented() {
        let sample = Sample {
            name: "test".to_string(),
            value: 1,
        };
        let pretty = to_json_pretty(&sample).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn yaml_round_trip() {
        let original = Sample {
            name: "test".to_string(),
            value: 7,
        };
        let yaml = to_yaml(&original).unwrap();
        assert!(yaml.contains("name: test"));
        let restored: Sample = from_yaml(&yaml).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn malformed_json_reports_context() {
        let err = from_json::<Sample>("{not json").unwrap_err();
        assert!(err.to_string().contains("JSON deserialization failed"));
    }
}
