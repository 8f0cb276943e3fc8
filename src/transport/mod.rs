//! # Transport
//!
//! The HTTP seam between the form controllers and the product API.
//!
//! Controllers only ever see an [`ApiRequest`] going out and an [`ApiResponse`]
//! (status + body text) coming back. Interpreting the body is the form's job, so
//! a transport never fails because of a non-2xx status.
//!
//! - [`HttpTransport`] talks to a real server through `reqwest`.
//! - [`MockTransport`](crate::framework::mock::MockTransport) answers from
//!   in-memory expectations for tests.

pub mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::model::ImageFile;

/// HTTP methods used by the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// A single-file multipart form.
    Multipart {
        field: &'static str,
        file: ImageFile,
    },
}

/// One request against the product API. `path` is relative to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, field: &'static str, file: ImageFile) -> Self {
        self.body = RequestBody::Multipart { field, file };
        self
    }
}

/// Status and body text of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures below the HTTP status level.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum TransportError {
    /// The server could not be reached.
    #[error("Failed to reach server: {0}")]
    Connect(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    /// The request could not be built or sent.
    #[error("Request failed: {0}")]
    Request(String),
    /// The response body could not be read.
    #[error("Failed to read response: {0}")]
    Body(String),
}

/// Sends requests to the product API.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
