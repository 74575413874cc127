//! Composable JSON value validators for wisp.
//!
//! A [`Validate`] implementation checks one `serde_json::Value` and reports
//! the first problem it finds. Small validators (type, bounds, length,
//! pattern, choices) compose through [`AllOf`]/[`AnyOf`]/[`Nullable`]/
//! [`Each`] and the object-level [`Schema`], which prefixes errors with a
//! dotted path to the failing field.

use std::fmt;

use regex::Regex;
use serde_json::Value;

/// The six JSON value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    /// The type of a concrete value.
    pub fn of(value: &Value) -> JsonType {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Bool,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonType::Null => "null",
            JsonType::Bool => "bool",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        };
        f.write_str(name)
    }
}

/// A failed validation.
#[derive(Debug)]
pub enum ValidationError {
    WrongType {
        expected: JsonType,
        actual: JsonType,
    },
    OutOfBounds {
        value: f64,
        min: Option<f64>,
        max: Option<f64>,
    },
    BadLength {
        len: usize,
        min: Option<usize>,
        max: Option<usize>,
    },
    /// Value has no length to check (not a string, array or object).
    NotSized {
        actual: JsonType,
    },
    NoMatch {
        pattern: String,
    },
    BadChoice {
        value: Value,
    },
    Excluded {
        value: Value,
    },
    MissingKey {
        key: String,
    },
    UnknownKey {
        key: String,
    },
    /// Every alternative of an [`AnyOf`] failed.
    NoAlternative {
        errors: Vec<ValidationError>,
    },
    /// A nested failure, located by a dotted path.
    At {
        path: String,
        source: Box<ValidationError>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::WrongType { expected, actual } => {
                write!(f, "expected {expected}, got {actual}")
            }
            ValidationError::OutOfBounds { value, min, max } => {
                write!(f, "value {value} outside bounds [")?;
                match min {
                    Some(min) => write!(f, "{min}")?,
                    None => write!(f, "-inf")?,
                }
                write!(f, ", ")?;
                match max {
                    Some(max) => write!(f, "{max}")?,
                    None => write!(f, "+inf")?,
                }
                write!(f, "]")
            }
            ValidationError::BadLength { len, min, max } => {
                write!(f, "length {len} outside allowed range ")?;
                write!(
                    f,
                    "[{}, {}]",
                    min.map_or("0".to_string(), |m| m.to_string()),
                    max.map_or("unbounded".to_string(), |m| m.to_string()),
                )
            }
            ValidationError::NotSized { actual } => {
                write!(f, "{actual} value has no length")
            }
            ValidationError::NoMatch { pattern } => {
                write!(f, "string does not match pattern {pattern:?}")
            }
            ValidationError::BadChoice { value } => {
                write!(f, "value {value} is not an allowed choice")
            }
            ValidationError::Excluded { value } => {
                write!(f, "value {value} is excluded")
            }
            ValidationError::MissingKey { key } => write!(f, "required key {key:?} missing"),
            ValidationError::UnknownKey { key } => write!(f, "unknown key {key:?}"),
            ValidationError::NoAlternative { errors } => {
                write!(f, "no alternative matched ({} tried)", errors.len())
            }
            ValidationError::At { path, source } => write!(f, "at {path}: {source}"),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::At { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Check one JSON value.
pub trait Validate {
    fn validate(&self, value: &Value) -> Result<(), ValidationError>;
}

impl Validate for Box<dyn Validate> {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.as_ref().validate(value)
    }
}

/// Accepts any value.
#[derive(Debug, Clone, Copy)]
pub struct Anything;

impl Validate for Anything {
    fn validate(&self, _value: &Value) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Requires the value to be of one JSON type.
#[derive(Debug, Clone, Copy)]
pub struct TypeIs(pub JsonType);

impl Validate for TypeIs {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let actual = JsonType::of(value);
        if actual == self.0 {
            Ok(())
        } else {
            Err(ValidationError::WrongType {
                expected: self.0,
                actual,
            })
        }
    }
}

/// Inclusive numeric bounds; either side may be open.
#[derive(Debug, Clone, Copy)]
pub struct Between {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validate for Between {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let number = value.as_f64().ok_or(ValidationError::WrongType {
            expected: JsonType::Number,
            actual: JsonType::of(value),
        })?;
        let below = self.min.is_some_and(|min| number < min);
        let above = self.max.is_some_and(|max| number > max);
        if below || above {
            return Err(ValidationError::OutOfBounds {
                value: number,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Length bounds for strings (in characters), arrays and objects.
#[derive(Debug, Clone, Copy)]
pub struct Length {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl Validate for Length {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let len = match value {
            Value::String(s) => s.chars().count(),
            Value::Array(items) => items.len(),
            Value::Object(entries) => entries.len(),
            other => {
                return Err(ValidationError::NotSized {
                    actual: JsonType::of(other),
                });
            }
        };
        let below = self.min.is_some_and(|min| len < min);
        let above = self.max.is_some_and(|max| len > max);
        if below || above {
            return Err(ValidationError::BadLength {
                len,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Requires a string matching a regular expression.
#[derive(Debug, Clone)]
pub struct Matches {
    pattern: Regex,
}

impl Matches {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Validate for Matches {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let text = value.as_str().ok_or(ValidationError::WrongType {
            expected: JsonType::String,
            actual: JsonType::of(value),
        })?;
        if self.pattern.is_match(text) {
            Ok(())
        } else {
            Err(ValidationError::NoMatch {
                pattern: self.pattern.as_str().to_string(),
            })
        }
    }
}

/// Enumerated allowed values.
#[derive(Debug, Clone)]
pub struct OneOf(pub Vec<Value>);

impl Validate for OneOf {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if self.0.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::BadChoice {
                value: value.clone(),
            })
        }
    }
}

/// Enumerated forbidden values.
#[derive(Debug, Clone)]
pub struct NoneOf(pub Vec<Value>);

impl Validate for NoneOf {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if self.0.contains(value) {
            Err(ValidationError::Excluded {
                value: value.clone(),
            })
        } else {
            Ok(())
        }
    }
}

/// Null passes; anything else is delegated to the inner validator.
#[derive(Debug, Clone)]
pub struct Nullable<V>(pub V);

impl<V: Validate> Validate for Nullable<V> {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if value.is_null() {
            Ok(())
        } else {
            self.0.validate(value)
        }
    }
}

/// Every validator must pass; the first failure is reported.
pub struct AllOf(pub Vec<Box<dyn Validate>>);

impl Validate for AllOf {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        for validator in &self.0 {
            validator.validate(value)?;
        }
        Ok(())
    }
}

/// At least one validator must pass; all failures are collected otherwise.
pub struct AnyOf(pub Vec<Box<dyn Validate>>);

impl Validate for AnyOf {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        for validator in &self.0 {
            match validator.validate(value) {
                Ok(()) => return Ok(()),
                Err(err) => errors.push(err),
            }
        }
        Err(ValidationError::NoAlternative { errors })
    }
}

/// Applies one validator to every element of an array, with indexed paths.
pub struct Each(pub Box<dyn Validate>);

impl Validate for Each {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let items = value.as_array().ok_or(ValidationError::WrongType {
            expected: JsonType::Array,
            actual: JsonType::of(value),
        })?;
        for (index, item) in items.iter().enumerate() {
            self.0.validate(item).map_err(|err| ValidationError::At {
                path: format!("[{index}]"),
                source: Box::new(err),
            })?;
        }
        Ok(())
    }
}

/// Policy for object keys the schema does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeys {
    /// Undeclared keys pass silently.
    #[default]
    Allow,
    /// Any undeclared key fails validation.
    Deny,
}

struct Field {
    name: String,
    validator: Box<dyn Validate>,
    required: bool,
}

/// Object validator: per-field validators with required/optional flags.
pub struct Schema {
    fields: Vec<Field>,
    unknown: UnknownKeys,
}

impl Schema {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            unknown: UnknownKeys::Allow,
        }
    }

    /// Declare a field that must be present.
    pub fn required(mut self, name: impl Into<String>, validator: impl Validate + 'static) -> Self {
        self.fields.push(Field {
            name: name.into(),
            validator: Box::new(validator),
            required: true,
        });
        self
    }

    /// Declare a field that may be absent.
    pub fn optional(mut self, name: impl Into<String>, validator: impl Validate + 'static) -> Self {
        self.fields.push(Field {
            name: name.into(),
            validator: Box::new(validator),
            required: false,
        });
        self
    }

    pub fn unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown = policy;
        self
    }

    /// Keys of `value` the schema does not declare.
    ///
    /// Useful for callers that strip undeclared keys instead of rejecting.
    pub fn undeclared_keys(&self, value: &Value) -> Vec<String> {
        let Some(object) = value.as_object() else {
            return Vec::new();
        };
        object
            .keys()
            .filter(|key| !self.fields.iter().any(|f| f.name == **key))
            .cloned()
            .collect()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Schema {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let object = value.as_object().ok_or(ValidationError::WrongType {
            expected: JsonType::Object,
            actual: JsonType::of(value),
        })?;

        for field in &self.fields {
            match object.get(&field.name) {
                Some(item) => {
                    field
                        .validator
                        .validate(item)
                        .map_err(|err| match err {
                            // Extend nested paths instead of re-wrapping.
                            ValidationError::At { path, source } => ValidationError::At {
                                path: format!("{}.{path}", field.name),
                                source,
                            },
                            other => ValidationError::At {
                                path: field.name.clone(),
                                source: Box::new(other),
                            },
                        })?;
                }
                None if field.required => {
                    return Err(ValidationError::MissingKey {
                        key: field.name.clone(),
                    });
                }
                None => {}
            }
        }

        if self.unknown == UnknownKeys::Deny {
            if let Some(key) = self.undeclared_keys(value).into_iter().next() {
                return Err(ValidationError::UnknownKey { key });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn anything_accepts_everything() {
        for value in [json!(null), json!(1), json!("x"), json!([1]), json!({})] {
            assert!(Anything.validate(&value).is_ok());
        }
    }

    #[test]
    fn type_is_checks_type() {
        assert!(TypeIs(JsonType::String).validate(&json!("ok")).is_ok());
        let err = TypeIs(JsonType::String).validate(&json!(3)).unwrap_err();
        assert_eq!(err.to_string(), "expected string, got number");
    }

    #[test]
    fn between_bounds_inclusive() {
        let bounds = Between {
            min: Some(0.0),
            max: Some(10.0),
        };
        assert!(bounds.validate(&json!(0)).is_ok());
        assert!(bounds.validate(&json!(10)).is_ok());
        assert!(bounds.validate(&json!(10.5)).is_err());
        assert!(bounds.validate(&json!(-1)).is_err());
        assert!(bounds.validate(&json!("nope")).is_err());
    }

    #[test]
    fn between_open_sides() {
        let at_least = Between {
            min: Some(5.0),
            max: None,
        };
        assert!(at_least.validate(&json!(1_000_000)).is_ok());
        assert!(at_least.validate(&json!(4.9)).is_err());
    }

    #[test]
    fn length_counts_chars_items_and_entries() {
        let len = Length {
            min: Some(1),
            max: Some(3),
        };
        assert!(len.validate(&json!("abc")).is_ok());
        assert!(len.validate(&json!("abcd")).is_err());
        assert!(len.validate(&json!([1, 2])).is_ok());
        assert!(len.validate(&json!({"a": 1})).is_ok());
        assert!(len.validate(&json!("")).is_err());
        assert!(matches!(
            len.validate(&json!(5)),
            Err(ValidationError::NotSized { .. })
        ));
    }

    #[test]
    fn matches_pattern() {
        let hex = Matches::new(r"^[0-9a-f]+$").unwrap();
        assert!(hex.validate(&json!("deadbeef")).is_ok());
        assert!(hex.validate(&json!("nope!")).is_err());
        assert!(hex.validate(&json!(12)).is_err());
    }

    #[test]
    fn choices_and_exclusions() {
        let choice = OneOf(vec![json!("red"), json!("green")]);
        assert!(choice.validate(&json!("red")).is_ok());
        assert!(choice.validate(&json!("blue")).is_err());

        let excluded = NoneOf(vec![json!(0)]);
        assert!(excluded.validate(&json!(1)).is_ok());
        assert!(excluded.validate(&json!(0)).is_err());
    }

    #[test]
    fn nullable_passes_null_through() {
        let validator = Nullable(TypeIs(JsonType::Number));
        assert!(validator.validate(&json!(null)).is_ok());
        assert!(validator.validate(&json!(3)).is_ok());
        assert!(validator.validate(&json!("x")).is_err());
    }

    #[test]
    fn all_of_first_failure_wins() {
        let validator = AllOf(vec![
            Box::new(TypeIs(JsonType::Number)),
            Box::new(Between {
                min: Some(0.0),
                max: None,
            }),
        ]);
        assert!(validator.validate(&json!(5)).is_ok());
        assert!(matches!(
            validator.validate(&json!("x")),
            Err(ValidationError::WrongType { .. })
        ));
        assert!(matches!(
            validator.validate(&json!(-2)),
            Err(ValidationError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn any_of_collects_failures() {
        let validator = AnyOf(vec![
            Box::new(TypeIs(JsonType::Number)),
            Box::new(TypeIs(JsonType::String)),
        ]);
        assert!(validator.validate(&json!(1)).is_ok());
        assert!(validator.validate(&json!("x")).is_ok());
        match validator.validate(&json!(true)).unwrap_err() {
            ValidationError::NoAlternative { errors } => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn each_reports_indexed_path() {
        let validator = Each(Box::new(TypeIs(JsonType::Number)));
        assert!(validator.validate(&json!([1, 2, 3])).is_ok());
        let err = validator.validate(&json!([1, "x", 3])).unwrap_err();
        assert_eq!(err.to_string(), "at [1]: expected number, got string");
    }

    fn user_schema() -> Schema {
        Schema::new()
            .required("name", Length { min: Some(1), max: Some(64) })
            .required(
                "age",
                Between {
                    min: Some(0.0),
                    max: Some(150.0),
                },
            )
            .optional("email", Matches::new(r"^[^@]+@[^@]+$").unwrap())
    }

    #[test]
    fn schema_accepts_valid_object() {
        let value = json!({"name": "ada", "age": 36, "email": "ada@example.com"});
        assert!(user_schema().validate(&value).is_ok());
        // Optional field may be absent.
        assert!(user_schema().validate(&json!({"name": "ada", "age": 36})).is_ok());
    }

    #[test]
    fn schema_missing_required_key() {
        let err = user_schema().validate(&json!({"age": 1})).unwrap_err();
        assert_eq!(err.to_string(), "required key \"name\" missing");
    }

    #[test]
    fn schema_reports_dotted_path() {
        let err = user_schema()
            .validate(&json!({"name": "ada", "age": 200}))
            .unwrap_err();
        assert_eq!(err.to_string(), "at age: value 200 outside bounds [0, 150]");
    }

    #[test]
    fn schema_unknown_key_policy() {
        let value = json!({"name": "ada", "age": 1, "shoe_size": 37});
        assert!(user_schema().validate(&value).is_ok());

        let strict = user_schema().unknown_keys(UnknownKeys::Deny);
        let err = strict.validate(&value).unwrap_err();
        assert_eq!(err.to_string(), "unknown key \"shoe_size\"");

        assert_eq!(user_schema().undeclared_keys(&value), vec!["shoe_size"]);
    }

    #[test]
    fn nested_schema_paths_compose() {
        let inner = Schema::new().required("city", TypeIs(JsonType::String));
        let outer = Schema::new().required("address", inner);
        let err = outer
            .validate(&json!({"address": {"city": 5}}))
            .unwrap_err();
        assert_eq!(err.to_string(), "at address.city: expected string, got number");
    }
}
