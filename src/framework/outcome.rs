//! # Request Outcomes
//!
//! Shared interpretation of what came back from the product API.
//!
//! Successful bodies are form specific (see [`FormAction::interpret`]). Failed
//! ones all follow the same convention: a JSON object with an `error` message,
//! optionally with the raw model output under `raw_response` or `raw_text`.
//!
//! [`FormAction::interpret`]: super::FormAction::interpret

use serde::Deserialize;

use super::SubmitError;
use crate::model::ProductRecord;
use crate::transport::{ApiResponse, TransportError};

/// Result of one submitted form action.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome<P> {
    Success(P),
    Failure(SubmitError),
}

impl<P> From<Result<P, SubmitError>> for RequestOutcome<P> {
    fn from(result: Result<P, SubmitError>) -> Self {
        match result {
            Ok(payload) => RequestOutcome::Success(payload),
            Err(error) => RequestOutcome::Failure(error),
        }
    }
}

/// Payload of forms that show a product: either a structured record or the raw
/// text fallback produced when structured extraction failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductPayload {
    Structured(ProductRecord),
    RawText(String),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    raw_response: Option<String>,
    #[serde(default)]
    raw_text: Option<String>,
}

/// Turns a non-2xx response into a [`SubmitError::Transport`].
///
/// A JSON body contributes its `error` (or `fallback` when that is missing or
/// empty) and its raw model output. A body that is not JSON yields
/// `"Server error: <status>"` and is kept whole for diagnostics.
pub fn interpret_failure(response: &ApiResponse, fallback: &str) -> SubmitError {
    match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(body) => SubmitError::Transport {
            status: Some(response.status),
            message: body
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| fallback.to_string()),
            raw_body: body.raw_response.or(body.raw_text).filter(|raw| !raw.is_empty()),
        },
        Err(_) => SubmitError::Transport {
            status: Some(response.status),
            message: format!("Server error: {}", response.status),
            raw_body: Some(response.body.clone()).filter(|raw| !raw.trim().is_empty()),
        },
    }
}

/// Maps a failure below the HTTP level into the submit taxonomy.
pub fn from_transport_error(error: TransportError) -> SubmitError {
    match error {
        TransportError::Connect(_) | TransportError::Timeout(_) | TransportError::Body(_) => {
            SubmitError::Transport {
                status: None,
                message: error.to_string(),
                raw_body: None,
            }
        }
        TransportError::Request(_) => SubmitError::Unexpected(error.to_string()),
    }
}
