//! # Form Errors
//!
//! Two families live here:
//!
//! - [`SubmitError`]: why a submission ended in the Error state. These are
//!   recovered inside the controller and shown to the user.
//! - [`FormError`]: plumbing failures between a [`FormClient`](super::FormClient)
//!   and its actor, plus the rejection of overlapping submissions.

/// Why a submission failed. Every variant carries the user-facing message.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum SubmitError {
    /// Pre-flight check failed; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// The server answered with a non-2xx status, or could not be reached.
    #[error("{message}")]
    Transport {
        status: Option<u16>,
        message: String,
        raw_body: Option<String>,
    },

    /// The server answered 2xx but the body had an unexpected shape.
    #[error("{message}")]
    Format {
        message: String,
        raw_body: Option<String>,
    },

    #[error("{0}")]
    Unexpected(String),
}

impl SubmitError {
    pub fn format(message: impl Into<String>, raw_body: &str) -> Self {
        SubmitError::Format {
            message: message.into(),
            raw_body: Some(raw_body.to_string()).filter(|raw| !raw.is_empty()),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Raw response text kept for diagnostics, if any.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            SubmitError::Transport { raw_body, .. } | SubmitError::Format { raw_body, .. } => {
                raw_body.as_deref()
            }
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Validation(_) => "validation",
            SubmitError::Transport { .. } => "transport",
            SubmitError::Format { .. } => "format",
            SubmitError::Unexpected(_) => "unexpected",
        }
    }
}

/// Errors between a form client and its actor.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FormError {
    #[error("Form closed")]
    Closed,
    #[error("Form dropped response channel")]
    Dropped,
    /// A submission for this form is still in flight.
    #[error("A submission is already in progress")]
    Busy,
}
