//! # Mock Transport
//!
//! Utilities for testing forms without a product API.
//!
//! Queue expectations with [`MockTransport::expect`], hand the transport to a
//! controller or console, then assert on [`MockTransport::requests`] and call
//! [`MockTransport::verify`].
//!
//! # Example
//! ```ignore
//! let mock = Arc::new(MockTransport::new());
//! mock.expect(Method::Get, "/product/7").respond(404, r#"{"error":"Product not found"}"#);
//!
//! let console = ProductConsole::new(mock.clone(), Arc::new(AlwaysConfirm));
//! // Submit forms...
//! mock.verify(); // Ensures all expectations were met
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};

enum Reply {
    Respond(ApiResponse),
    Fail(TransportError),
}

struct Expectation {
    method: Method,
    path: String,
    delay: Option<Duration>,
    reply: Reply,
}

/// A [`Transport`] that answers from a queue of expectations, in order.
///
/// A request that does not match the next expectation, or arrives when none is
/// left, fails with [`TransportError::Request`].
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    received: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with this method and path.
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, matched or not.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.received.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder returned by [`MockTransport::expect`].
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    delay: Option<Duration>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Holds the reply back for `delay`.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn respond(self, status: u16, body: impl Into<String>) {
        self.push(Reply::Respond(ApiResponse::new(status, body)));
    }

    pub fn respond_json(self, status: u16, body: Value) {
        self.push(Reply::Respond(ApiResponse::new(status, body.to_string())));
    }

    pub fn fail(self, error: TransportError) {
        self.push(Reply::Fail(error));
    }

    fn push(self, reply: Reply) {
        self.expectations.lock().unwrap().push_back(Expectation {
            method: self.method,
            path: self.path,
            delay: self.delay,
            reply,
        });
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        debug!(method = %request.method, path = %request.path, "Mock request");
        let (method, path) = (request.method, request.path.clone());
        self.received.lock().unwrap().push(request);

        let next = self.expectations.lock().unwrap().pop_front();
        let Some(expectation) = next else {
            return Err(TransportError::Request(format!(
                "unexpected request: {} {}",
                method, path
            )));
        };
        if expectation.method != method || expectation.path != path {
            return Err(TransportError::Request(format!(
                "expected {} {}, got {} {}",
                expectation.method, expectation.path, method, path
            )));
        }

        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        match expectation.reply {
            Reply::Respond(response) => Ok(response),
            Reply::Fail(error) => Err(error),
        }
    }
}
