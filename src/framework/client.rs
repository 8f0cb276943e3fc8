use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{instrument, warn};

use super::{FormAction, FormError, FormRequest, FormSnapshot};

/// A type-safe handle to a running [`FormActor`](super::FormActor).
///
/// Clones share one in-flight flag: while a submission is pending, further
/// submissions through any clone are rejected with [`FormError::Busy`] and send
/// nothing.
pub struct FormClient<A: FormAction> {
    form: &'static str,
    sender: mpsc::Sender<FormRequest<A>>,
    in_flight: Arc<AtomicBool>,
}

impl<A: FormAction> Clone for FormClient<A> {
    fn clone(&self) -> Self {
        Self {
            form: self.form,
            sender: self.sender.clone(),
            in_flight: self.in_flight.clone(),
        }
    }
}

/// Releases the in-flight flag unless the submission reached the actor, including
/// when the caller drops `submit` while the channel is full.
struct Reservation<'a> {
    flag: &'a AtomicBool,
    handed_off: bool,
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        if !self.handed_off {
            self.flag.store(false, Ordering::Release);
        }
    }
}

impl<A: FormAction> FormClient<A> {
    pub fn new(
        form: &'static str,
        sender: mpsc::Sender<FormRequest<A>>,
        in_flight: Arc<AtomicBool>,
    ) -> Self {
        Self {
            form,
            sender,
            in_flight,
        }
    }

    /// Whether a submission is currently pending.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    #[instrument(skip(self, input), fields(form = self.form))]
    pub async fn submit(&self, input: A::Input) -> Result<FormSnapshot, FormError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Submission rejected, form busy");
            return Err(FormError::Busy);
        }

        let mut reservation = Reservation {
            flag: &self.in_flight,
            handed_off: false,
        };

        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FormRequest::Submit { input, respond_to })
            .await
            .map_err(|_| FormError::Closed)?;
        // The actor clears the flag from here on.
        reservation.handed_off = true;

        response.await.map_err(|_| FormError::Dropped)
    }

    pub async fn snapshot(&self) -> Result<FormSnapshot, FormError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FormRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FormError::Closed)?;
        response.await.map_err(|_| FormError::Dropped)
    }
}
