//! Generic form framework.
//!
//! This module provides the building blocks every product form is assembled from.
//!
//! # Main Components
//!
//! - [`FormAction`] - Trait each form implements: validation, request, interpretation, rendering
//! - [`FormController`] - Drives a form through Idle, Validating, Loading, Success and Error
//! - [`FormActor`] - Task that owns a controller and serializes its submissions
//! - [`FormClient`] - Typed handle that submits to a form and rejects overlapping submissions
//! - [`SubmitError`] / [`FormError`] - Failure taxonomy
//!
//! # Testing
//!
//! See [`mock`] module for a transport that answers from in-memory expectations.

pub mod action;
pub mod actor;
pub mod client;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod mock;
pub mod outcome;
pub mod state;

pub use action::{FormAction, FormMessages};
pub use actor::{FormActor, FormRequest, Response};
pub use client::FormClient;
pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm};
pub use controller::FormController;
pub use error::{FormError, SubmitError};
pub use outcome::{from_transport_error, interpret_failure, ProductPayload, RequestOutcome};
pub use state::{FormSnapshot, FormState};
