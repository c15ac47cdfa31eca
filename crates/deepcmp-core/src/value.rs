use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

use crate::{CanonicalizeError, CompareOptions, ComparisonResult, Number};

/// Represents the canonical data model walked by the comparator.
///
/// Any acyclic JSON-like structure is representable: mappings with unique
/// string keys, ordered sequences, and the four scalar categories. Mapping
/// keys are kept in canonical sorted order, which makes traversal and
/// mismatch emission deterministic across runs.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The null scalar.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar represented as IEEE-754 double precision.
    Number(Number),
    /// String scalar.
    String(String),
    /// Ordered sequence of values.
    Sequence(Vec<Value>),
    /// Mapping with unique string keys and deterministic key ordering.
    Mapping(BTreeMap<String, Value>),
}

/// The runtime category of a [`Value`].
///
/// Two values with different kinds can never be structurally equal; the
/// comparator reports a single type mismatch for such a pair instead of
/// descending further.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// JSON `null`.
    Null,
    /// Boolean scalar.
    Bool,
    /// Numeric scalar.
    Number,
    /// String scalar.
    String,
    /// Ordered sequence.
    Sequence,
    /// Keyed mapping.
    Mapping,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool => f.write_str("boolean"),
            Self::Number => f.write_str("number"),
            Self::String => f.write_str("string"),
            Self::Sequence => f.write_str("sequence"),
            Self::Mapping => f.write_str("mapping"),
        }
    }
}

impl Value {
    /// Parses a JSON string into the canonical value representation.
    ///
    /// ```
    /// # use deepcmp_core::Value;
    /// let value = Value::from_json_str("{\"hello\":\"world\"}")?;
    /// assert!(matches!(value, Value::Mapping(_)));
    /// # Ok::<(), deepcmp_core::CanonicalizeError>(())
    /// ```
    pub fn from_json_str(input: &str) -> Result<Self, CanonicalizeError> {
        let value: JsonValue = serde_json::from_str(input)?;
        Self::from_json_value(value)
    }

    /// Parses a YAML string into the canonical value representation.
    ///
    /// ```
    /// # use deepcmp_core::Value;
    /// let value = Value::from_yaml_str("---\nanswer: 42\n")?;
    /// assert!(matches!(value, Value::Mapping(_)));
    /// # Ok::<(), deepcmp_core::CanonicalizeError>(())
    /// ```
    pub fn from_yaml_str(input: &str) -> Result<Self, CanonicalizeError> {
        let value: YamlValue = serde_yaml::from_str(input)?;
        Self::from_yaml_value(value)
    }

    /// Converts a serde JSON value into a [`Value`].
    pub fn from_json_value(value: JsonValue) -> Result<Self, CanonicalizeError> {
        match value {
            JsonValue::Null => Ok(Self::Null),
            JsonValue::Bool(v) => Ok(Self::Bool(v)),
            JsonValue::Number(num) => {
                let text = num.to_string();
                let Some(as_f64) = num.as_f64() else {
                    return Err(CanonicalizeError::NumberOutOfRange { value: text });
                };
                Ok(Self::Number(Number::new(as_f64)?))
            }
            JsonValue::String(s) => Ok(Self::String(s)),
            JsonValue::Array(values) => {
                let mut items = Vec::with_capacity(values.len());
                for value in values {
                    items.push(Self::from_json_value(value)?);
                }
                Ok(Self::Sequence(items))
            }
            JsonValue::Object(map) => {
                let mut mapping = BTreeMap::new();
                for (key, value) in map {
                    mapping.insert(key, Self::from_json_value(value)?);
                }
                Ok(Self::Mapping(mapping))
            }
        }
    }

    fn from_yaml_value(value: YamlValue) -> Result<Self, CanonicalizeError> {
        match value {
            YamlValue::Null => Ok(Self::Null),
            YamlValue::Bool(v) => Ok(Self::Bool(v)),
            YamlValue::Number(num) => {
                if let Some(f) = num.as_f64() {
                    return Ok(Self::Number(Number::new(f)?));
                }
                Err(CanonicalizeError::NumberOutOfRange { value: num.to_string() })
            }
            YamlValue::String(s) => Ok(Self::String(s)),
            YamlValue::Sequence(seq) => {
                let mut items = Vec::with_capacity(seq.len());
                for value in seq {
                    items.push(Self::from_yaml_value(value)?);
                }
                Ok(Self::Sequence(items))
            }
            YamlValue::Mapping(map) => {
                let mut mapping = BTreeMap::new();
                for (key, value) in map {
                    let key = match key {
                        YamlValue::String(s) => s,
                        other => {
                            return Err(CanonicalizeError::NonStringYamlKey {
                                found: format!("{other:?}"),
                            });
                        }
                    };
                    mapping.insert(key, Self::from_yaml_value(value)?);
                }
                Ok(Self::Mapping(mapping))
            }
            YamlValue::Tagged(tagged) => {
                Err(CanonicalizeError::UnsupportedYamlTag { tag: tagged.tag.to_string() })
            }
        }
    }

    /// Converts the value back into a serde JSON value.
    ///
    /// ```
    /// # use deepcmp_core::Value;
    /// let value = Value::from_json_str("[1,2]")?;
    /// assert_eq!(value.to_json_value(), serde_json::json!([1, 2]));
    /// # Ok::<(), deepcmp_core::CanonicalizeError>(())
    /// ```
    #[must_use]
    pub fn to_json_value(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(v) => JsonValue::Bool(*v),
            Self::Number(n) => JsonValue::Number(n.to_json_number()),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::Sequence(values) => {
                JsonValue::Array(values.iter().map(Self::to_json_value).collect())
            }
            Self::Mapping(map) => {
                let mut object = serde_json::Map::new();
                for (key, value) in map {
                    object.insert(key.clone(), value.to_json_value());
                }
                JsonValue::Object(object)
            }
        }
    }

    /// Returns the runtime category of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
        }
    }

    /// Structural equality that respects [`CompareOptions`].
    ///
    /// This is the short-circuiting mirror of [`Value::compare`]: the
    /// comparison result is empty exactly when this returns `true`.
    ///
    /// ```
    /// # use deepcmp_core::{CompareOptions, Value};
    /// let lhs = Value::from_json_str("{\"id\":1,\"ts\":\"a\"}")?;
    /// let rhs = Value::from_json_str("{\"id\":1,\"ts\":\"b\"}")?;
    /// let opts = CompareOptions::default().with_exclude_keys(["ts"]).expect("exclusions");
    /// assert!(lhs.eq_with_options(&rhs, &opts));
    /// # Ok::<(), deepcmp_core::CanonicalizeError>(())
    /// ```
    #[must_use]
    pub fn eq_with_options(&self, other: &Self, options: &CompareOptions) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.equals_with_precision(*b, options.precision()),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b.iter()).all(|(x, y)| x.eq_with_options(y, options))
            }
            (Self::Mapping(a), Self::Mapping(b)) => mapping_equals(a, b, options),
            _ => false,
        }
    }

    /// Computes the full structural comparison against another value.
    ///
    /// ```
    /// # use deepcmp_core::{CompareOptions, Value};
    /// let expected = Value::from_json_str("{\"a\":1}").unwrap();
    /// let actual = Value::from_json_str("{\"a\":2}").unwrap();
    /// let result = expected.compare(&actual, &CompareOptions::default());
    /// assert_eq!(result.len(), 1);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self, options: &CompareOptions) -> ComparisonResult {
        crate::compare::compare_values(self, other, options)
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = CanonicalizeError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Self::from_json_value(value)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Self::from_json_value(value).map_err(serde::de::Error::custom)
    }
}

fn mapping_equals(
    lhs: &BTreeMap<String, Value>,
    rhs: &BTreeMap<String, Value>,
    options: &CompareOptions,
) -> bool {
    for (key, value) in lhs {
        if options.excludes_key(key) {
            continue;
        }
        match rhs.get(key) {
            Some(other) if value.eq_with_options(other, options) => {}
            _ => return false,
        }
    }
    rhs.keys().all(|key| options.excludes_key(key) || lhs.contains_key(key))
}
