//! The loosely-typed `features` attribute as it arrives from the product API.
//!
//! The server stores features as a JSON array, but older rows and AI extraction
//! results can hand back plain strings, JSON-encoded strings, numbers or nothing
//! at all. [`FieldValue`] makes those shapes explicit so the normalizer can match
//! on them exhaustively.

use serde::Deserialize;
use serde_json::{Number, Value};
use std::fmt;

/// A features-like value in one of the shapes the server may send.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum FieldValue {
    /// Missing or `null`.
    #[default]
    Absent,
    /// A JSON array. Items are usually strings.
    Sequence(Vec<Value>),
    /// Free text: either JSON-encoded or comma delimited.
    Text(String),
    /// A bare number or boolean.
    Scalar(Scalar),
}

/// Non-text scalar carried by [`FieldValue::Scalar`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(Number),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Absent,
            Value::Array(items) => FieldValue::Sequence(items),
            Value::String(text) => FieldValue::Text(text),
            Value::Number(n) => FieldValue::Scalar(Scalar::Number(n)),
            Value::Bool(b) => FieldValue::Scalar(Scalar::Bool(b)),
            object @ Value::Object(_) => FieldValue::Sequence(vec![object]),
        }
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::Sequence(items.into_iter().map(Value::String).collect())
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Scalar(Scalar::Number(n.into()))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Scalar(Scalar::Bool(b))
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
