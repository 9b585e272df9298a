//! End-to-end submission scenarios against the simulated order service.
//!
//! Time is paused, so the 1500 ms service delay elapses instantly.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use leessauce_core::{
    FormField, FormPhase, OrderDraft, OrderError, OrderResult, OrderService, OrderSession,
    PendingOrder, ProductId, Severity, SimulatedOrderService, SubmitOutcome,
};

/// Counts calls and answers after a delay with a fixed result.
struct CountingService {
    calls: AtomicUsize,
    delay: Duration,
    fail: bool,
}

impl CountingService {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            delay: Duration::from_millis(1500),
            fail,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderService for CountingService {
    async fn place_order(&self, _order: &PendingOrder) -> OrderResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if self.fail {
            Err(OrderError::Network("order service unreachable".into()))
        } else {
            Ok(())
        }
    }
}

fn fill_john_doe(session: &OrderSession) {
    session.edit(|form| {
        form.set_first_name("John");
        form.set_last_name("Doe");
        form.set_address("123 Main St");
        form.update_quantity(ProductId::MrMild, "2");
        form.update_quantity(ProductId::HolyJalapeno, "0");
        form.update_quantity(ProductId::HornyHabanero, "0");
    });
}

// ============================================================================
// Happy path
// ============================================================================

#[tokio::test(start_paused = true)]
async fn john_doe_orders_two_mr_mild() {
    let session = OrderSession::new(Arc::new(SimulatedOrderService::default()));
    fill_john_doe(&session);

    let outcome = session.submit().await;

    let toast = outcome.notification().expect("success toast");
    assert_eq!(toast.title, "Order Received!");
    assert!(toast.description.contains("2 x Mr. Mild"));
    assert!(toast.description.contains("John"));
    assert_eq!(toast.severity, Severity::Default);

    let form = session.snapshot();
    assert_eq!(form.draft(), &OrderDraft::default());
    assert!(form.errors().is_empty());
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn form_is_reusable_after_success() {
    let service = CountingService::new(false);
    let session = OrderSession::new(service.clone());

    fill_john_doe(&session);
    assert!(session.submit().await.is_confirmed());
    fill_john_doe(&session);
    assert!(session.submit().await.is_confirmed());

    assert_eq!(service.calls(), 2);
}

// ============================================================================
// Validation gate
// ============================================================================

#[tokio::test(start_paused = true)]
async fn empty_form_never_reaches_service() {
    let service = CountingService::new(false);
    let session = OrderSession::new(service.clone());

    let outcome = session.submit().await;

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.len(), 4);
    assert_eq!(service.calls(), 0);
    assert_eq!(session.snapshot().errors(), &errors);
    assert!(SubmitOutcome::Invalid(errors).notification().is_none());
}

#[tokio::test(start_paused = true)]
async fn fixing_the_form_clears_errors_on_success() {
    let session = OrderSession::new(CountingService::new(false));
    session.edit(|form| form.set_first_name("John"));

    assert!(matches!(session.submit().await, SubmitOutcome::Invalid(_)));
    assert!(session.snapshot().errors().contains(FormField::Address));

    fill_john_doe(&session);
    assert!(session.submit().await.is_confirmed());
    assert!(session.snapshot().errors().is_empty());
}

// ============================================================================
// Re-entrancy
// ============================================================================

#[tokio::test(start_paused = true)]
async fn second_submit_while_in_flight_is_noop() {
    let service = CountingService::new(false);
    let session = OrderSession::new(service.clone());
    fill_john_doe(&session);

    let (first, second) = tokio::join!(session.submit(), session.submit());

    assert!(first.is_confirmed());
    assert!(matches!(second, SubmitOutcome::AlreadyInProgress));
    assert!(second.notification().is_none());
    assert_eq!(service.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn begin_marks_form_submitting_until_finish() {
    let session = OrderSession::new(CountingService::new(false));
    fill_john_doe(&session);

    let in_flight = session.begin().expect("valid draft");
    assert!(session.snapshot().is_submitting());
    assert_eq!(in_flight.pending().ordered_items, "2 x Mr. Mild");
    assert!(matches!(session.begin(), Err(SubmitOutcome::AlreadyInProgress)));

    let outcome = in_flight.finish().await;
    assert!(outcome.is_confirmed());
    assert!(!session.snapshot().is_submitting());
}

// ============================================================================
// Failure path
// ============================================================================

#[tokio::test(start_paused = true)]
async fn failure_keeps_draft_for_retry() {
    let session = OrderSession::new(CountingService::new(true));
    fill_john_doe(&session);
    let before = session.snapshot().draft().clone();

    let outcome = session.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(OrderError::Network(_))));
    let toast = outcome.notification().expect("failure toast");
    assert_eq!(toast.title, "Error");
    assert_eq!(toast.description, "Something went wrong. Please try again.");
    assert_eq!(toast.severity, Severity::Destructive);

    let form = session.snapshot();
    assert_eq!(form.draft(), &before);
    assert!(!form.is_submitting());
}

#[tokio::test(start_paused = true)]
async fn rejecting_simulated_service_fails_cleanly() {
    let service = SimulatedOrderService::new(Duration::from_millis(1500)).rejecting();
    let session = OrderSession::new(Arc::new(service));
    fill_john_doe(&session);

    let outcome = session.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Failed(OrderError::ServiceUnavailable(_))));
    assert_eq!(session.snapshot().draft().first_name, "John");
}

// ============================================================================
// Unmount while in flight
// ============================================================================

#[tokio::test(start_paused = true)]
async fn closing_mid_flight_abandons_order() {
    let session = OrderSession::new(CountingService::new(false));
    fill_john_doe(&session);

    let in_flight = session.begin().expect("valid draft");
    let closer = session.clone();
    let task = tokio::spawn(in_flight.finish());

    tokio::time::sleep(Duration::from_millis(100)).await;
    closer.close();

    let outcome = task.await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Abandoned));
    assert!(outcome.notification().is_none());
    assert_eq!(session.snapshot().draft(), &OrderDraft::default());
    assert!(!session.snapshot().is_submitting());
}
