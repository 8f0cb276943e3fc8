//! Cards shown in a form's detail panel.

use std::fmt;

use crate::model::ProductRecord;
use crate::normalizer::normalize;

/// Length of the raw response excerpt shown under an error.
pub const SNIPPET_LIMIT: usize = 150;

const UNKNOWN_PRODUCT: &str = "Unknown Product";
const NOT_AVAILABLE: &str = "N/A";
/// Placeholder price the server stores when extraction found none.
const PRICE_PLACEHOLDER: &str = "Not available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl DetailField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// A structured product rendered as a title and labelled fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub title: String,
    pub fields: Vec<DetailField>,
}

impl ProductCard {
    /// Card for a freshly analysed upload.
    ///
    /// Price is omitted when the server only has its placeholder; dimensions are
    /// omitted when missing.
    pub fn for_upload(record: &ProductRecord) -> Self {
        let mut fields = vec![DetailField::new("Brand", or_na(&record.brand))];
        if let Some(price) = record.price.as_deref().filter(|p| *p != PRICE_PLACEHOLDER) {
            fields.push(DetailField::new("Price", price));
        }
        fields.push(DetailField::new("Features", normalize(&record.features)));
        if let Some(dimensions) = &record.dimensions {
            fields.push(DetailField::new("Dimensions", dimensions.as_str()));
        }
        Self {
            title: title(record),
            fields,
        }
    }

    /// Card for a product fetched by id.
    pub fn for_lookup(record: &ProductRecord) -> Self {
        let mut fields = vec![
            DetailField::new("ID", or_na(&record.id)),
            DetailField::new("Brand", or_na(&record.brand)),
            DetailField::new("Price", or_na(&record.price)),
            DetailField::new("Features", normalize(&record.features)),
        ];
        if let Some(dimensions) = &record.dimensions {
            fields.push(DetailField::new("Dimensions", dimensions.as_str()));
        }
        if let Some(created_at) = &record.created_at {
            fields.push(DetailField::new("Created", created_at.as_str()));
        }
        Self {
            title: title(record),
            fields,
        }
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

fn title(record: &ProductRecord) -> String {
    record
        .product_name
        .clone()
        .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string())
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

/// A product known only by its raw text description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTextCard {
    pub heading: &'static str,
    pub description: String,
    pub notice: &'static str,
}

impl RawTextCard {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            heading: "Basic Product Information",
            description: description.into(),
            notice: "Note: Full specifications not available",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCard {
    pub message: String,
    pub tips: Vec<&'static str>,
    /// First [`SNIPPET_LIMIT`] characters of the raw response, if any.
    pub snippet: Option<String>,
}

impl ErrorCard {
    pub fn new(message: impl Into<String>, tips: &[&'static str], raw_body: Option<&str>) -> Self {
        Self {
            message: message.into(),
            tips: tips.to_vec(),
            snippet: raw_body.filter(|raw| !raw.is_empty()).map(snippet),
        }
    }
}

/// Truncates on a character boundary and marks the cut.
pub fn snippet(raw: &str) -> String {
    let head: String = raw.chars().take(SNIPPET_LIMIT).collect();
    format!("{}...", head)
}

impl fmt::Display for ProductCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for field in &self.fields {
            writeln!(f, "  {}: {}", field.label, field.value)?;
        }
        Ok(())
    }
}

impl fmt::Display for RawTextCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  {}", self.notice)
    }
}

impl fmt::Display for ErrorCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        if !self.tips.is_empty() {
            writeln!(f, "Tips for better results:")?;
            for tip in &self.tips {
                writeln!(f, "  - {}", tip)?;
            }
        }
        if let Some(snippet) = &self.snippet {
            writeln!(f, "Technical details:")?;
            writeln!(f, "  {}", snippet)?;
        }
        Ok(())
    }
}
