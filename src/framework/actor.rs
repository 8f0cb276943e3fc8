//! # Form Actor
//!
//! Each form runs as its own task that owns a [`FormController`]. Front ends talk
//! to it through a [`FormClient`]; the actor processes one message at a time, so
//! a form can never have two submissions interleaving on its state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use super::{Confirm, FormAction, FormClient, FormController, FormSnapshot};
use crate::transport::Transport;

/// One-shot reply channel used by the actor.
pub type Response<T> = oneshot::Sender<T>;

/// Messages accepted by a [`FormActor`].
#[derive(Debug)]
pub enum FormRequest<A: FormAction> {
    Submit {
        input: A::Input,
        respond_to: Response<FormSnapshot>,
    },
    Snapshot {
        respond_to: Response<FormSnapshot>,
    },
}

pub struct FormActor<A: FormAction> {
    receiver: mpsc::Receiver<FormRequest<A>>,
    controller: FormController<A>,
    in_flight: Arc<AtomicBool>,
}

impl<A: FormAction> FormActor<A> {
    pub fn new(
        buffer_size: usize,
        action: A,
        transport: Arc<dyn Transport>,
        confirm: Arc<dyn Confirm>,
    ) -> (Self, FormClient<A>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let in_flight = Arc::new(AtomicBool::new(false));
        let client = FormClient::new(action.name(), sender, in_flight.clone());
        let actor = Self {
            receiver,
            controller: FormController::new(action, transport, confirm),
            in_flight,
        };
        (actor, client)
    }

    /// Processes messages until every client has been dropped.
    pub async fn run(mut self) {
        let form = self.controller.action().name();
        info!(form, "Form started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FormRequest::Submit { input, respond_to } => {
                    let snapshot = self.controller.submit(input).await;
                    debug_assert!(!snapshot.state.is_in_flight());
                    self.in_flight.store(false, Ordering::Release);
                    info!(form, state = %snapshot.state, status = %snapshot.status.text, "Submitted");
                    let _ = respond_to.send(snapshot);
                }
                FormRequest::Snapshot { respond_to } => {
                    debug!(form, state = %self.controller.state(), "Snapshot");
                    let _ = respond_to.send(self.controller.snapshot());
                }
            }
        }

        info!(form, state = %self.controller.state(), "Shutdown");
    }
}
