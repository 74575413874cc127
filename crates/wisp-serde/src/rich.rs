//! Tagged JSON encoding for values plain JSON cannot represent.
//!
//! Each rich value encodes as a single-key object whose key is a `__tag__`
//! marker, e.g. `{"__bytes__": "aGk="}` or `{"__date__": "2025-01-31"}`.
//! Decoding inspects the tag and reverses the encoding, so
//! `decode_rich(&encode_rich(&v))` returns `v` for every variant.
//!
//! Downstream crates can extend the scheme with their own tags through
//! [`CodecRegistry`].

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde_json::{Map, Value, json};
use wisp_registry::{Registry, RegistryError};

const DATETIME_ENCODE: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";
const DATETIME_DECODE: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
const TIME_ENCODE: &str = "%H:%M:%S%.6fZ";
const TIME_DECODE: &str = "%H:%M:%S%.fZ";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub const TAG_BYTES: &str = "__bytes__";
pub const TAG_DATETIME: &str = "__datetime__";
pub const TAG_DATE: &str = "__date__";
pub const TAG_TIME: &str = "__time__";
pub const TAG_DURATION: &str = "__duration__";
pub const TAG_RANGE: &str = "__range__";
pub const TAG_DECIMAL: &str = "__decimal__";
pub const TAG_SET: &str = "__set__";

/// A value outside JSON's native repertoire.
#[derive(Debug, Clone, PartialEq)]
pub enum Rich {
    /// Raw binary data, carried as base64.
    Bytes(Vec<u8>),
    /// Naive (zone-less) timestamp.
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    /// Signed duration, carried as whole seconds plus subsecond nanos.
    Duration(TimeDelta),
    /// Arithmetic progression with a non-zero step.
    Range { start: i64, stop: i64, step: i64 },
    /// Arbitrary-precision decimal, carried as its string rendering.
    Decimal(String),
    /// Set of JSON values, carried as a list preserving encounter order.
    Set(Vec<Value>),
}

/// Errors from decoding tagged values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichError {
    /// Value is not a single-key `__tag__` object.
    NotTagged,
    /// Tagged, but with a tag nobody registered.
    UnknownTag(String),
    /// Tag registered twice with a [`CodecRegistry`].
    DuplicateTag(String),
    /// Known tag with an unusable payload.
    Malformed { tag: String, reason: String },
}

impl fmt::Display for RichError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RichError::NotTagged => write!(f, "value carries no rich tag"),
            RichError::UnknownTag(tag) => write!(f, "unknown rich tag {tag:?}"),
            RichError::DuplicateTag(tag) => write!(f, "rich tag {tag:?} registered twice"),
            RichError::Malformed { tag, reason } => {
                write!(f, "malformed payload for tag {tag:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for RichError {}

fn malformed(tag: &str, reason: impl fmt::Display) -> RichError {
    RichError::Malformed {
        tag: tag.to_string(),
        reason: reason.to_string(),
    }
}

/// Encode a rich value as its tagged JSON form.
pub fn encode_rich(value: &Rich) -> Value {
    match value {
        Rich::Bytes(bytes) => json!({ TAG_BYTES: BASE64.encode(bytes) }),
        Rich::DateTime(dt) => json!({ TAG_DATETIME: dt.format(DATETIME_ENCODE).to_string() }),
        Rich::Date(date) => json!({ TAG_DATE: date.format(DATE_FORMAT).to_string() }),
        Rich::Time(time) => json!({ TAG_TIME: time.format(TIME_ENCODE).to_string() }),
        Rich::Duration(delta) => json!({
            TAG_DURATION: {
                "secs": delta.num_seconds(),
                "nanos": delta.subsec_nanos(),
            }
        }),
        Rich::Range { start, stop, step } => json!({
            TAG_RANGE: { "start": start, "stop": stop, "step": step }
        }),
        Rich::Decimal(digits) => json!({ TAG_DECIMAL: digits }),
        Rich::Set(items) => json!({ TAG_SET: items }),
    }
}

/// The `__tag__` key of a single-key object, if it looks like one.
pub fn tag_of(value: &Value) -> Option<&str> {
    let object = value.as_object()?;
    if object.len() != 1 {
        return None;
    }
    let key = object.keys().next()?;
    (key.starts_with("__") && key.ends_with("__") && key.len() > 4).then_some(key.as_str())
}

fn payload<'a>(value: &'a Value, tag: &str) -> &'a Value {
    // Callers only reach this after `tag_of` confirmed the shape.
    &value[tag]
}

fn payload_str<'a>(value: &'a Value, tag: &str) -> Result<&'a str, RichError> {
    payload(value, tag)
        .as_str()
        .ok_or_else(|| malformed(tag, "expected a string payload"))
}

fn field_i64(object: &Map<String, Value>, tag: &str, field: &str) -> Result<i64, RichError> {
    object
        .get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| malformed(tag, format!("missing integer field {field:?}")))
}

/// Decode a tagged JSON value back into a [`Rich`] value.
pub fn decode_rich(value: &Value) -> Result<Rich, RichError> {
    let tag = tag_of(value).ok_or(RichError::NotTagged)?;
    match tag {
        TAG_BYTES => {
            let text = payload_str(value, tag)?;
            let bytes = BASE64
                .decode(text)
                .map_err(|e| malformed(tag, e))?;
            Ok(Rich::Bytes(bytes))
        }
        TAG_DATETIME => {
            let text = payload_str(value, tag)?;
            let dt = NaiveDateTime::parse_from_str(text, DATETIME_DECODE)
                .map_err(|e| malformed(tag, e))?;
            Ok(Rich::DateTime(dt))
        }
        TAG_DATE => {
            let text = payload_str(value, tag)?;
            let date =
                NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| malformed(tag, e))?;
            Ok(Rich::Date(date))
        }
        TAG_TIME => {
            let text = payload_str(value, tag)?;
            let time =
                NaiveTime::parse_from_str(text, TIME_DECODE).map_err(|e| malformed(tag, e))?;
            Ok(Rich::Time(time))
        }
        TAG_DURATION => {
            let object = payload(value, tag)
                .as_object()
                .ok_or_else(|| malformed(tag, "expected an object payload"))?;
            let secs = field_i64(object, tag, "secs")?;
            let nanos = field_i64(object, tag, "nanos")?;
            let delta = TimeDelta::try_seconds(secs)
                .ok_or_else(|| malformed(tag, "seconds out of range"))?
                + TimeDelta::nanoseconds(nanos);
            Ok(Rich::Duration(delta))
        }
        TAG_RANGE => {
            let object = payload(value, tag)
                .as_object()
                .ok_or_else(|| malformed(tag, "expected an object payload"))?;
            let start = field_i64(object, tag, "start")?;
            let stop = field_i64(object, tag, "stop")?;
            let step = field_i64(object, tag, "step")?;
            if step == 0 {
                return Err(malformed(tag, "step must be non-zero"));
            }
            Ok(Rich::Range { start, stop, step })
        }
        TAG_DECIMAL => Ok(Rich::Decimal(payload_str(value, tag)?.to_string())),
        TAG_SET => {
            let items = payload(value, tag)
                .as_array()
                .ok_or_else(|| malformed(tag, "expected a list payload"))?;
            Ok(Rich::Set(items.clone()))
        }
        other => Err(RichError::UnknownTag(other.to_string())),
    }
}

/// Decode if tagged; `None` when the value carries no tag at all.
pub fn decode_any(value: &Value) -> Option<Result<Rich, RichError>> {
    tag_of(value).map(|_| decode_rich(value))
}

/// Encode/decode pair for one custom tag, operating on raw JSON payloads.
pub struct Codec {
    pub encode: Box<dyn Fn(&Value) -> Result<Value, RichError> + Send + Sync>,
    pub decode: Box<dyn Fn(&Value) -> Result<Value, RichError> + Send + Sync>,
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Codec")
    }
}

/// Registry of custom tag codecs; tags register once.
#[derive(Debug)]
pub struct CodecRegistry {
    codecs: Registry<Codec>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self {
            codecs: Registry::new("rich-codecs"),
        }
    }

    /// Register a codec for `tag`. A tag may only be registered once.
    pub fn register(&mut self, tag: impl Into<String>, codec: Codec) -> Result<(), RichError> {
        let tag = tag.into();
        match self.codecs.register(tag.clone(), codec) {
            Ok(_) => Ok(()),
            Err(RegistryError::Duplicate { key }) => Err(RichError::DuplicateTag(key)),
            Err(err) => Err(RichError::Malformed {
                tag,
                reason: err.to_string(),
            }),
        }
    }

    /// Encode `payload` under `tag` as a tagged single-key object.
    pub fn encode(&self, tag: &str, payload: &Value) -> Result<Value, RichError> {
        let codec = self
            .codecs
            .get(tag)
            .ok_or_else(|| RichError::UnknownTag(tag.to_string()))?;
        let encoded = (codec.encode)(payload)?;
        Ok(json!({ tag: encoded }))
    }

    /// Decode a tagged value with its registered codec.
    ///
    /// Returns the tag alongside the decoded payload.
    pub fn decode(&self, value: &Value) -> Result<(String, Value), RichError> {
        let tag = tag_of(value).ok_or(RichError::NotTagged)?;
        let codec = self
            .codecs
            .get(tag)
            .ok_or_else(|| RichError::UnknownTag(tag.to_string()))?;
        let decoded = (codec.decode)(payload(value, tag))?;
        Ok((tag.to_string(), decoded))
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.codecs.keys()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}
