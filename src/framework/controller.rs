//! # Form Controller
//!
//! The generic request/response lifecycle shared by every form:
//!
//! ```text
//! Idle ──submit──▶ Validating ──invalid──────────────────────────▶ Error
//!                      │
//!                      ├──declined (destructive forms)──▶ previous state
//!                      ▼
//!                   Loading ──one request──▶ 2xx + expected body ──▶ Success
//!                                       └──▶ anything else ─────────▶ Error
//! ```
//!
//! Success and Error are not terminal: the next submission starts over.
//! Every failure is recovered here and turned into a status line plus an error
//! panel; nothing propagates to the caller.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::{
    from_transport_error, interpret_failure, Confirm, FormAction, FormSnapshot, FormState,
    RequestOutcome,
};
use crate::transport::Transport;
use crate::view::{Panel, StatusColor, StatusLine};

/// Drives one form through its lifecycle.
///
/// A controller is owned by exactly one task (see [`FormActor`](super::FormActor)),
/// so `submit` takes `&mut self` and needs no locking.
pub struct FormController<A: FormAction> {
    action: A,
    transport: Arc<dyn Transport>,
    confirm: Arc<dyn Confirm>,
    snapshot: FormSnapshot,
}

impl<A: FormAction> FormController<A> {
    pub fn new(action: A, transport: Arc<dyn Transport>, confirm: Arc<dyn Confirm>) -> Self {
        let snapshot = FormSnapshot::idle(action.name());
        Self {
            action,
            transport,
            confirm,
            snapshot,
        }
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn state(&self) -> FormState {
        self.snapshot.state
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.snapshot.clone()
    }

    /// Runs one submission to completion and returns what the form now shows.
    #[instrument(skip(self, input), fields(form = self.action.name()))]
    pub async fn submit(&mut self, input: A::Input) -> FormSnapshot {
        debug!(?input, "submit called");
        let previous = self.snapshot.state;
        self.transition(FormState::Validating);

        if let Err(error) = self.action.validate(&input) {
            info!(error = %error, "Validation failed");
            self.snapshot.panel = Panel::Empty;
            self.snapshot.reset_inputs = false;
            let status = error.message();
            self.snapshot.error = Some(error);
            self.transition(FormState::Error);
            self.set_status(status, StatusColor::Red);
            return self.snapshot();
        }

        if let Some(prompt) = self.action.confirmation(&input) {
            if !self.confirm.confirm(&prompt) {
                info!("Confirmation declined");
                self.transition(previous);
                return self.snapshot();
            }
        }

        let messages = self.action.messages();
        self.snapshot.error = None;
        self.snapshot.reset_inputs = false;
        self.snapshot.panel = Panel::Loading;
        self.transition(FormState::Loading);
        self.set_status(messages.loading, StatusColor::Blue);

        let request = self.action.request(input);
        debug!(method = %request.method, path = %request.path, "Sending request");
        let outcome: RequestOutcome<A::Payload> = match self.transport.send(request).await {
            Ok(response) if response.is_success() => self.action.interpret(&response).into(),
            Ok(response) => RequestOutcome::Failure(interpret_failure(
                &response,
                self.action.failure_fallback(),
            )),
            Err(e) => RequestOutcome::Failure(from_transport_error(e)),
        };

        match outcome {
            RequestOutcome::Success(payload) => {
                debug!(?payload, "Request succeeded");
                self.snapshot.panel = self.action.render(&payload);
                self.snapshot.reset_inputs = self.action.resets_on_success();
                self.transition(FormState::Success);
                self.set_status(messages.success, StatusColor::Green);
            }
            RequestOutcome::Failure(error) => {
                warn!(kind = error.kind(), error = %error, "Request failed");
                self.snapshot.panel = self.action.render_error(&error);
                let status = self.action.error_status(&error);
                self.snapshot.error = Some(error);
                self.transition(FormState::Error);
                self.set_status(status, StatusColor::Red);
            }
        }

        self.snapshot()
    }

    fn transition(&mut self, next: FormState) {
        debug!(from = %self.snapshot.state, to = %next, "Transition");
        self.snapshot.state = next;
    }

    // Always the last write of a terminal transition.
    fn set_status(&mut self, text: impl Into<String>, color: StatusColor) {
        self.snapshot.status = StatusLine::new(text, color);
    }
}
