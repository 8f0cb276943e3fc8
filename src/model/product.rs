//! Product wire types.
//!
//! The server owns this shape; every field is optional on the wire. Text-like
//! fields tolerate numbers and booleans since the AI extraction step does not
//! always quote prices or ids.
//!
//! See [`ProductCard`](crate::view::ProductCard) for how a record is displayed.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::FieldValue;

/// A product as returned by the product API.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub price: Option<String>,
    #[serde(default)]
    pub features: FieldValue,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dimensions: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: Option<String>,
}

/// Accepts a string, number or boolean as text. `null` and empty strings become `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Body of `PUT /product/{id}`.
///
/// Always serializes all five editable keys, blank or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductUpdate {
    pub product_name: String,
    pub price: String,
    pub features: Vec<String>,
    pub brand: String,
    pub dimensions: String,
}

impl ProductUpdate {
    pub fn is_blank(&self) -> bool {
        self.product_name.is_empty()
            && self.price.is_empty()
            && self.features.is_empty()
            && self.brand.is_empty()
            && self.dimensions.is_empty()
    }
}

impl From<&ProductUpdate> for Value {
    fn from(update: &ProductUpdate) -> Self {
        serde_json::json!({
            "product_name": update.product_name,
            "price": update.price,
            "features": update.features,
            "brand": update.brand,
            "dimensions": update.dimensions,
        })
    }
}

/// Optional `{ "message": ... }` body returned by update and delete.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
}
