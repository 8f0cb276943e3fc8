//! Delete form: `DELETE /product/{id}`, only after the user confirms.

use super::{acknowledgement, product_path, require_product_id};
use crate::framework::{FormAction, FormMessages, SubmitError};
use crate::model::Acknowledgement;
use crate::transport::{ApiRequest, ApiResponse, Method};
use crate::view::Panel;

#[derive(Debug, Clone, Default)]
pub struct DeleteInput {
    pub product_id: String,
}

impl DeleteInput {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteForm;

impl FormAction for DeleteForm {
    type Input = DeleteInput;
    type Payload = Acknowledgement;

    fn name(&self) -> &'static str {
        "delete"
    }

    fn messages(&self) -> FormMessages {
        FormMessages {
            loading: "Deleting product...",
            success: "Product deleted successfully!",
        }
    }

    fn validate(&self, input: &DeleteInput) -> Result<(), SubmitError> {
        require_product_id(&input.product_id)
    }

    fn confirmation(&self, input: &DeleteInput) -> Option<String> {
        Some(format!(
            "Are you sure you want to delete product #{}?",
            input.product_id.trim()
        ))
    }

    fn request(&self, input: DeleteInput) -> ApiRequest {
        ApiRequest::new(Method::Delete, product_path(&input.product_id))
    }

    fn interpret(&self, response: &ApiResponse) -> Result<Acknowledgement, SubmitError> {
        Ok(acknowledgement(response))
    }

    fn failure_fallback(&self) -> &'static str {
        "Failed to delete product"
    }

    fn render(&self, _ack: &Acknowledgement) -> Panel {
        Panel::Empty
    }

    fn resets_on_success(&self) -> bool {
        true
    }
}
