//! Cacheable style values.
//!
//! Style trees carry arbitrary JSON values, but only a closed set of
//! primitives can key the declaration cache. [`StyleValue`] is that set;
//! [`StyleValue::from_json`] is the single place where anything else is
//! rejected.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StyleError;

/// A primitive style value that can be turned into an atomic class.
///
/// Equality is strict: `StyleValue::Number(12.0)` and
/// `StyleValue::Str("12".into())` are different values and produce
/// different classes. Positive and negative zero compare equal.
///
/// # Example
///
/// ```rust
/// use atomic_style::StyleValue;
/// use serde_json::json;
///
/// let v = StyleValue::from_json("color", &json!("red")).unwrap();
/// assert_eq!(v, StyleValue::from("red"));
///
/// assert!(StyleValue::from_json("shadowOffset", &json!({ "width": 1 })).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A string value such as `"red"` or `"10px"`.
    Str(String),
    /// A finite number. Rendered with a `px` unit unless the property is unitless.
    Number(f64),
    /// A boolean value.
    Bool(bool),
}

impl StyleValue {
    /// Converts a raw JSON value declared for `property`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnserializableValue`] for null, arrays, objects
    /// and non-finite numbers.
    pub fn from_json(property: &str, value: &Value) -> Result<Self, StyleError> {
        let rejected = |kind: &str| StyleError::UnserializableValue {
            property: property.to_string(),
            kind: kind.to_string(),
        };

        match value {
            Value::String(s) => Ok(StyleValue::Str(s.clone())),
            Value::Bool(b) => Ok(StyleValue::Bool(*b)),
            Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() => Ok(StyleValue::Number(f)),
                _ => Err(rejected("non-finite number")),
            },
            Value::Null => Err(rejected("null")),
            Value::Array(_) => Err(rejected("array")),
            Value::Object(_) => Err(rejected("object")),
        }
    }

    fn normalized_bits(f: f64) -> u64 {
        if f == 0.0 {
            0.0f64.to_bits()
        } else {
            f.to_bits()
        }
    }
}

impl PartialEq for StyleValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StyleValue::Str(a), StyleValue::Str(b)) => a == b,
            (StyleValue::Number(a), StyleValue::Number(b)) => {
                Self::normalized_bits(*a) == Self::normalized_bits(*b)
            }
            (StyleValue::Bool(a), StyleValue::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for StyleValue {}

impl Hash for StyleValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            StyleValue::Str(s) => s.hash(state),
            StyleValue::Number(f) => Self::normalized_bits(*f).hash(state),
            StyleValue::Bool(b) => b.hash(state),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Str(s) => f.write_str(s),
            StyleValue::Number(n) if *n == 0.0 => f.write_str("0"),
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}
