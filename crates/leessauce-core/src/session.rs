//! A mounted order form and its submissions.
//!
//! [`OrderSession`] is a cheap, cloneable handle. The UI keeps one per mounted
//! form and hands clones to spawned submission tasks. The form state sits
//! behind a mutex that is only held for synchronous edits, never across the
//! order service call.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::form::{OrderForm, PendingOrder, SubmitOutcome};
use crate::service::OrderService;

/// Shared handle to one form instance.
#[derive(Clone)]
pub struct OrderSession {
    form: Arc<Mutex<OrderForm>>,
    service: Arc<dyn OrderService>,
    closed: CancellationToken,
}

impl OrderSession {
    pub fn new(service: Arc<dyn OrderService>) -> Self {
        Self {
            form: Arc::new(Mutex::new(OrderForm::new())),
            service,
            closed: CancellationToken::new(),
        }
    }

    /// Copy of the current form state, for rendering.
    pub fn snapshot(&self) -> OrderForm {
        self.form.lock().clone()
    }

    /// Mutate the form (field edits, quantity updates).
    pub fn edit<R>(&self, f: impl FnOnce(&mut OrderForm) -> R) -> R {
        f(&mut self.form.lock())
    }

    pub fn is_closed(&self) -> bool {
        self.closed.is_cancelled()
    }

    /// Validate and enter the in-progress state.
    ///
    /// On success the returned [`InFlightOrder`] must be finished to reach
    /// the order service. Otherwise the outcome is final: invalid draft,
    /// a submission already running, or a closed session.
    pub fn begin(&self) -> Result<InFlightOrder, SubmitOutcome> {
        if self.is_closed() {
            return Err(SubmitOutcome::Abandoned);
        }

        let pending = self.form.lock().begin_submit().map_err(|rejected| {
            tracing::debug!(?rejected, "Order not submitted");
            SubmitOutcome::from(rejected)
        })?;

        tracing::info!(ticket = pending.ticket(), items = %pending.ordered_items, "Submitting order");

        Ok(InFlightOrder {
            session: self.clone(),
            pending,
        })
    }

    /// Full submission: [`begin`](Self::begin) then [`InFlightOrder::finish`].
    pub async fn submit(&self) -> SubmitOutcome {
        match self.begin() {
            Ok(in_flight) => in_flight.finish().await,
            Err(outcome) => outcome,
        }
    }

    /// The hosting surface went away. Resets the draft and abandons any
    /// submission still waiting on the order service.
    pub fn close(&self) {
        if self.closed.is_cancelled() {
            return;
        }
        self.closed.cancel();
        self.form.lock().reset();
        tracing::debug!("Order session closed");
    }
}

impl std::fmt::Debug for OrderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderSession")
            .field("form", &*self.form.lock())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// A submission that passed validation and is waiting on the order service.
#[derive(Debug)]
pub struct InFlightOrder {
    session: OrderSession,
    pending: PendingOrder,
}

impl InFlightOrder {
    pub fn pending(&self) -> &PendingOrder {
        &self.pending
    }

    /// Call the order service and apply its answer to the form.
    pub async fn finish(self) -> SubmitOutcome {
        let Self { session, pending } = self;

        let result = tokio::select! {
            biased;
            _ = session.closed.cancelled() => {
                tracing::info!(ticket = pending.ticket(), "Order abandoned, form closed");
                return SubmitOutcome::Abandoned;
            }
            result = session.service.place_order(&pending) => result,
        };

        if let Err(ref e) = result {
            tracing::error!(ticket = pending.ticket(), "Order submission failed: {}", e);
        }

        let outcome = session.form.lock().complete(pending, result);
        if let SubmitOutcome::Confirmed(ref confirmation) = outcome {
            tracing::info!(items = %confirmation.ordered_items, "Order confirmed");
        }
        outcome
    }
}
