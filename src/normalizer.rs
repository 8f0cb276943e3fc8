//! # Field Normalizer
//!
//! Turns a [`FieldValue`] into the single line shown next to "Features:".
//!
//! The fallback chain is fixed:
//!
//! 1. absent → [`NO_FEATURES_AVAILABLE`]
//! 2. sequence → items joined with `", "` ([`NO_FEATURES_SPECIFIED`] when empty)
//! 3. text → parsed as JSON; an array is treated as a sequence, anything else as a
//!    one-item sequence
//! 4. text that is not JSON → split on `,`, trimmed, empty parts dropped
//! 5. number or boolean → its canonical string
//!
//! [`normalize`] is total: if rendering an item fails it degrades to
//! [`UNDISPLAYABLE`] instead of returning an error.

use serde_json::Value;
use tracing::warn;

use crate::model::FieldValue;

pub const NO_FEATURES_AVAILABLE: &str = "No features available";
pub const NO_FEATURES_SPECIFIED: &str = "No features specified";
pub const UNDISPLAYABLE: &str = "Could not display features";

const SEPARATOR: &str = ", ";

/// Renders a features-like value as one display string. Never fails.
pub fn normalize(value: &FieldValue) -> String {
    match try_normalize(value) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Feature display failed");
            UNDISPLAYABLE.to_string()
        }
    }
}

fn try_normalize(value: &FieldValue) -> Result<String, serde_json::Error> {
    match value {
        FieldValue::Absent => Ok(NO_FEATURES_AVAILABLE.to_string()),
        FieldValue::Sequence(items) => join_items(items),
        FieldValue::Text(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => join_items(&items),
            Ok(single) => join_items(std::slice::from_ref(&single)),
            Err(_) => Ok(join_parts(split_delimited(text))),
        },
        FieldValue::Scalar(scalar) => Ok(join_parts(vec![scalar.to_string()])),
    }
}

fn join_items(items: &[Value]) -> Result<String, serde_json::Error> {
    let parts = items
        .iter()
        .map(item_text)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(join_parts(parts))
}

fn join_parts(parts: Vec<String>) -> String {
    if parts.is_empty() {
        NO_FEATURES_SPECIFIED.to_string()
    } else {
        parts.join(SEPARATOR)
    }
}

fn item_text(item: &Value) -> Result<String, serde_json::Error> {
    match item {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        nested => serde_json::to_string(nested),
    }
}

/// Splits comma delimited text into trimmed, non-empty parts.
///
/// Also used by the update form to turn its features input into a list.
pub fn split_delimited(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
