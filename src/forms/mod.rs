//! The four product forms.
//!
//! Each form is a [`FormAction`](crate::framework::FormAction): it owns its
//! input type, validation messages, request shape and rendering, and nothing
//! else. Lifecycle, status colours and error recovery come from the framework.

pub mod delete;
pub mod lookup;
pub mod update;
pub mod upload;

pub use delete::{DeleteForm, DeleteInput};
pub use lookup::{LookupForm, LookupInput};
pub use update::{UpdateForm, UpdateInput};
pub use upload::{UploadForm, UploadInput};

use crate::framework::SubmitError;
use crate::model::Acknowledgement;
use crate::transport::ApiResponse;

pub const MISSING_PRODUCT_ID: &str = "Please enter a product ID";
pub const INVALID_PRODUCT_ID: &str = "Please enter a valid product ID";

/// Path of a single product resource. The id is encoded as one path segment.
pub(crate) fn product_path(id: &str) -> String {
    format!("/product/{}", urlencoding::encode(id.trim()))
}

pub(crate) fn require_product_id(id: &str) -> Result<(), SubmitError> {
    match id.trim() {
        "" => Err(SubmitError::Validation(MISSING_PRODUCT_ID.to_string())),
        // Dot segments survive encoding and are resolved away by URL parsing.
        "." | ".." => Err(SubmitError::Validation(INVALID_PRODUCT_ID.to_string())),
        _ => Ok(()),
    }
}

/// Update and delete treat their 2xx body as optional.
pub(crate) fn acknowledgement(response: &ApiResponse) -> Acknowledgement {
    if response.body.trim().is_empty() {
        return Acknowledgement::default();
    }
    serde_json::from_str(&response.body).unwrap_or_default()
}
