//! # FormAction Trait
//!
//! The contract every form (upload, lookup, update, delete) implements so a single
//! generic [`FormController`](super::FormController) can drive it.
//!
//! A form describes *what* it does; the controller owns *when*:
//!
//! 1. [`validate`](FormAction::validate) the raw inputs
//! 2. optionally ask for [`confirmation`](FormAction::confirmation)
//! 3. build exactly one [`request`](FormAction::request)
//! 4. [`interpret`](FormAction::interpret) a 2xx body into a payload
//! 5. [`render`](FormAction::render) the payload into a [`Panel`]
//!
//! Non-2xx responses are handled by the controller with
//! [`interpret_failure`](super::interpret_failure), using the form's
//! [`failure_fallback`](FormAction::failure_fallback).
//!
//! # Associated Types
//! `Input` is what the user typed or picked; `Payload` is what a successful
//! response turns into. A lookup form therefore cannot be handed update inputs,
//! and its render function only ever sees product payloads.

use std::fmt::Debug;

use super::SubmitError;
use crate::transport::{ApiRequest, ApiResponse};
use crate::view::{ErrorCard, Panel};

/// Fixed status texts of one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormMessages {
    pub loading: &'static str,
    pub success: &'static str,
}

pub trait FormAction: Send + Sync + 'static {
    /// Raw form inputs.
    type Input: Send + Debug + 'static;

    /// What a successful response is parsed into.
    type Payload: Send + Debug;

    /// Short name used in logs and snapshots.
    fn name(&self) -> &'static str;

    fn messages(&self) -> FormMessages;

    /// Pre-flight checks. A failure here means no request is sent.
    fn validate(&self, input: &Self::Input) -> Result<(), SubmitError>;

    /// Prompt to confirm before sending, for destructive forms.
    fn confirmation(&self, _input: &Self::Input) -> Option<String> {
        None
    }

    /// Builds the single request for an already validated input.
    fn request(&self, input: Self::Input) -> ApiRequest;

    /// Parses a 2xx response.
    fn interpret(&self, response: &ApiResponse) -> Result<Self::Payload, SubmitError>;

    /// Message used when a JSON error body carries no `error`.
    fn failure_fallback(&self) -> &'static str;

    fn render(&self, payload: &Self::Payload) -> Panel;

    /// Status text shown for a failed request.
    fn error_status(&self, error: &SubmitError) -> String {
        format!("Error: {}", error)
    }

    /// Guidance listed under error messages.
    fn error_tips(&self) -> &'static [&'static str] {
        &[]
    }

    fn render_error(&self, error: &SubmitError) -> Panel {
        Panel::Error(ErrorCard::new(error.message(), self.error_tips(), error.raw_body()))
    }

    /// Whether a success should clear the form's editable inputs.
    fn resets_on_success(&self) -> bool {
        false
    }
}
