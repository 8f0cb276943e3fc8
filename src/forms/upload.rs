//! # Upload Form
//!
//! Sends a product photo to `POST /upload` (multipart field `image`) and shows
//! what the server extracted from it.
//!
//! A successful analysis comes back in one of two shapes:
//!
//! - `{"product": {...}}` when the image yielded structured product data
//! - `{"raw_text": "..."}` when only a plain description could be produced
//!
//! A non-empty `raw_text` wins over `product`.

use serde::Deserialize;

use crate::framework::{FormAction, FormMessages, ProductPayload, SubmitError};
use crate::model::{ImageFile, ProductRecord};
use crate::transport::{ApiRequest, ApiResponse, Method};
use crate::view::{Panel, ProductCard, RawTextCard};

pub const UPLOAD_PATH: &str = "/upload";
pub const IMAGE_FIELD: &str = "image";

const NO_IMAGE: &str = "Please select an image file";
const INVALID_RESPONSE: &str = "Invalid response format from server";

const TIPS: &[&str] = &[
    "Use clear, well-lit product photos",
    "Ensure product packaging is visible",
    "Try different angles if needed",
];

#[derive(Debug, Clone, Default)]
pub struct UploadInput {
    pub image: Option<ImageFile>,
}

impl UploadInput {
    pub fn new(image: ImageFile) -> Self {
        Self { image: Some(image) }
    }
}

#[derive(Debug, Deserialize)]
struct AnalysisBody {
    #[serde(default)]
    product: Option<ProductRecord>,
    #[serde(default)]
    raw_text: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UploadForm;

impl FormAction for UploadForm {
    type Input = UploadInput;
    type Payload = ProductPayload;

    fn name(&self) -> &'static str {
        "upload"
    }

    fn messages(&self) -> FormMessages {
        FormMessages {
            loading: "Analyzing image...",
            success: "Analysis complete!",
        }
    }

    fn validate(&self, input: &UploadInput) -> Result<(), SubmitError> {
        match &input.image {
            Some(_) => Ok(()),
            None => Err(SubmitError::Validation(NO_IMAGE.to_string())),
        }
    }

    fn request(&self, input: UploadInput) -> ApiRequest {
        let request = ApiRequest::new(Method::Post, UPLOAD_PATH);
        match input.image {
            Some(image) => request.multipart(IMAGE_FIELD, image),
            None => request,
        }
    }

    fn interpret(&self, response: &ApiResponse) -> Result<ProductPayload, SubmitError> {
        let body: AnalysisBody = serde_json::from_str(&response.body)
            .map_err(|_| SubmitError::format(INVALID_RESPONSE, &response.body))?;

        match body {
            AnalysisBody {
                raw_text: Some(text),
                ..
            } if !text.is_empty() => Ok(ProductPayload::RawText(text)),
            AnalysisBody {
                product: Some(product),
                ..
            } => Ok(ProductPayload::Structured(product)),
            _ => Err(SubmitError::format(INVALID_RESPONSE, &response.body)),
        }
    }

    fn failure_fallback(&self) -> &'static str {
        "Upload failed"
    }

    fn render(&self, payload: &ProductPayload) -> Panel {
        match payload {
            ProductPayload::Structured(product) => Panel::Product(ProductCard::for_upload(product)),
            ProductPayload::RawText(text) => Panel::RawText(RawTextCard::new(text.as_str())),
        }
    }

    fn error_status(&self, _error: &SubmitError) -> String {
        "Error processing image".to_string()
    }

    fn error_tips(&self) -> &'static [&'static str] {
        TIPS
    }
}
