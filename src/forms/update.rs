//! # Update Form
//!
//! Edits a product with `PUT /product/{id}`. The body always carries all five
//! editable keys; blank inputs are sent as empty strings (or an empty
//! `features` list) and the server decides what a blank means.

use serde_json::Value;

use super::{acknowledgement, product_path, require_product_id};
use crate::framework::{FormAction, FormMessages, SubmitError};
use crate::model::{Acknowledgement, ProductUpdate};
use crate::normalizer::split_delimited;
use crate::transport::{ApiRequest, ApiResponse, Method};
use crate::view::Panel;

const NOTHING_TO_UPDATE: &str = "Please provide at least one field to update";

/// Raw text of the update form. `features` is comma separated.
#[derive(Debug, Clone, Default)]
pub struct UpdateInput {
    pub product_id: String,
    pub product_name: String,
    pub price: String,
    pub features: String,
    pub brand: String,
    pub dimensions: String,
}

impl UpdateInput {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            ..Self::default()
        }
    }

    /// The PUT body built from these inputs.
    pub fn to_update(&self) -> ProductUpdate {
        ProductUpdate {
            product_name: self.product_name.trim().to_string(),
            price: self.price.trim().to_string(),
            features: split_delimited(&self.features),
            brand: self.brand.trim().to_string(),
            dimensions: self.dimensions.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateForm;

impl FormAction for UpdateForm {
    type Input = UpdateInput;
    type Payload = Acknowledgement;

    fn name(&self) -> &'static str {
        "update"
    }

    fn messages(&self) -> FormMessages {
        FormMessages {
            loading: "Updating product...",
            success: "Product updated successfully!",
        }
    }

    fn validate(&self, input: &UpdateInput) -> Result<(), SubmitError> {
        require_product_id(&input.product_id)?;
        if input.to_update().is_blank() {
            return Err(SubmitError::Validation(NOTHING_TO_UPDATE.to_string()));
        }
        Ok(())
    }

    fn request(&self, input: UpdateInput) -> ApiRequest {
        let body = Value::from(&input.to_update());
        ApiRequest::new(Method::Put, product_path(&input.product_id)).json(body)
    }

    fn interpret(&self, response: &ApiResponse) -> Result<Acknowledgement, SubmitError> {
        Ok(acknowledgement(response))
    }

    fn failure_fallback(&self) -> &'static str {
        "Failed to update product"
    }

    fn render(&self, _ack: &Acknowledgement) -> Panel {
        Panel::Empty
    }

    fn resets_on_success(&self) -> bool {
        true
    }
}
