//! Lookup form: `GET /product/{id}`, always bypassing caches.

use serde_json::Value;

use super::{product_path, require_product_id};
use crate::framework::{FormAction, FormMessages, SubmitError};
use crate::model::ProductRecord;
use crate::transport::{ApiRequest, ApiResponse, Method};
use crate::view::{Panel, ProductCard};

const INVALID_PRODUCT: &str = "Invalid product data received";

#[derive(Debug, Clone, Default)]
pub struct LookupInput {
    pub product_id: String,
}

impl LookupInput {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LookupForm;

impl FormAction for LookupForm {
    type Input = LookupInput;
    type Payload = ProductRecord;

    fn name(&self) -> &'static str {
        "lookup"
    }

    fn messages(&self) -> FormMessages {
        FormMessages {
            loading: "Fetching product...",
            success: "Product loaded",
        }
    }

    fn validate(&self, input: &LookupInput) -> Result<(), SubmitError> {
        require_product_id(&input.product_id)
    }

    fn request(&self, input: LookupInput) -> ApiRequest {
        ApiRequest::new(Method::Get, product_path(&input.product_id))
            .header("Cache-Control", "no-cache")
    }

    fn interpret(&self, response: &ApiResponse) -> Result<ProductRecord, SubmitError> {
        let invalid = || SubmitError::format(INVALID_PRODUCT, &response.body);
        match serde_json::from_str::<Value>(&response.body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }

    fn failure_fallback(&self) -> &'static str {
        "Product not found"
    }

    fn render(&self, product: &ProductRecord) -> Panel {
        Panel::Product(ProductCard::for_lookup(product))
    }

    // The lookup status shows the bare message.
    fn error_status(&self, error: &SubmitError) -> String {
        error.message()
    }
}
