//! Order intake state machine.
//!
//! ```text
//! Idle ──begin_submit──▶ (validate) ──errors──▶ Idle (errors shown)
//!                           │
//!                           └──ok──▶ Submitting ──complete(Ok)──▶ Idle + reset
//!                                          │
//!                                          └──complete(Err)──▶ Idle, draft kept
//! ```
//!
//! [`OrderForm`] is synchronous. The await in the middle lives in
//! [`crate::session`], which owns the form behind a mutex.

use crate::catalog::ProductId;
use crate::draft::{parse_quantity, OrderDraft};
use crate::error::{OrderError, OrderResult};
use crate::notify::Notification;
use crate::validation::{validate, ValidationErrors};

pub const CONFIRMATION_TITLE: &str = "Order Received!";
pub const FAILURE_TITLE: &str = "Error";
pub const FAILURE_DESCRIPTION: &str = "Something went wrong. Please try again.";

/// Where the form is in a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// A validated snapshot of the draft on its way to the order service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOrder {
    ticket: u64,
    pub draft: OrderDraft,
    /// Catalog-ordered summary, e.g. `"2 x Mr. Mild"`.
    pub ordered_items: String,
}

impl PendingOrder {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }
}

/// What the customer is told after a successful order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub first_name: String,
    pub ordered_items: String,
}

impl OrderConfirmation {
    pub fn message(&self) -> String {
        format!(
            "Thank you {}! Your order for {} has been received.",
            self.first_name, self.ordered_items
        )
    }

    pub fn notification(&self) -> Notification {
        Notification::new(CONFIRMATION_TITLE, self.message())
    }
}

/// Why `begin_submit` did not start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    Invalid(ValidationErrors),
    InProgress,
}

/// Result of one submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; the errors are now on the form.
    Invalid(ValidationErrors),
    /// Another submission was already running. Nothing happened.
    AlreadyInProgress,
    Confirmed(OrderConfirmation),
    /// The order service failed. The draft is untouched.
    Failed(OrderError),
    /// The form was closed or reset while the order was in flight.
    Abandoned,
}

impl SubmitOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmitOutcome::Confirmed(_))
    }

    /// Toast for this outcome. Only success and failure notify; validation
    /// problems are shown inline.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            SubmitOutcome::Confirmed(confirmation) => Some(confirmation.notification()),
            SubmitOutcome::Failed(_) => {
                Some(Notification::destructive(FAILURE_TITLE, FAILURE_DESCRIPTION))
            }
            _ => None,
        }
    }
}

impl From<SubmitRejected> for SubmitOutcome {
    fn from(rejected: SubmitRejected) -> Self {
        match rejected {
            SubmitRejected::Invalid(errors) => SubmitOutcome::Invalid(errors),
            SubmitRejected::InProgress => SubmitOutcome::AlreadyInProgress,
        }
    }
}

/// Draft, current errors and the in-progress flag of one mounted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    draft: OrderDraft,
    errors: ValidationErrors,
    phase: FormPhase,
    /// Bumped on every begin and reset; a completion carrying an older
    /// ticket belongs to a draft that no longer exists.
    ticket: u64,
    /// Per product, bumped whenever quantity input is discarded. The
    /// field still shows the rejected text until it is redrawn.
    input_revisions: [u32; ProductId::COUNT],
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.draft.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.draft.last_name = value.into();
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.draft.address = value.into();
    }

    /// Apply raw quantity input. Returns whether the draft changed.
    ///
    /// Discarded input moves [`Self::input_revision`] for `id` on.
    pub fn update_quantity(&mut self, id: ProductId, raw: &str) -> bool {
        if parse_quantity(raw).is_none() {
            let revision = &mut self.input_revisions[id.index()];
            *revision = revision.wrapping_add(1);
        }
        self.draft.update_quantity(id, raw)
    }

    /// Changes every time input for `id` is discarded, so a view keyed on
    /// it redraws the field with the kept quantity.
    pub fn input_revision(&self, id: ProductId) -> u32 {
        self.input_revisions[id.index()]
    }

    /// Run validation, store the result, and return it.
    pub fn validate(&mut self) -> &ValidationErrors {
        self.errors = validate(&self.draft);
        &self.errors
    }

    /// Validate and, if clean, move to `Submitting`.
    pub fn begin_submit(&mut self) -> Result<PendingOrder, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InProgress);
        }

        if !self.validate().is_empty() {
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }

        self.ticket = self.ticket.wrapping_add(1);
        self.phase = FormPhase::Submitting;

        Ok(PendingOrder {
            ticket: self.ticket,
            ordered_items: self.draft.ordered_items(),
            draft: self.draft.clone(),
        })
    }

    /// Apply the order service's answer for `pending`.
    ///
    /// Always leaves the form `Idle` when the ticket is current. A stale
    /// ticket (the form was reset in the meantime) changes nothing and
    /// yields [`SubmitOutcome::Abandoned`].
    pub fn complete(&mut self, pending: PendingOrder, result: OrderResult<()>) -> SubmitOutcome {
        if !self.is_submitting() || pending.ticket != self.ticket {
            tracing::debug!(ticket = pending.ticket, "Dropping result for a stale order");
            return SubmitOutcome::Abandoned;
        }

        self.phase = FormPhase::Idle;

        match result {
            Ok(()) => {
                self.draft.reset();
                self.errors.clear();
                SubmitOutcome::Confirmed(OrderConfirmation {
                    first_name: pending.draft.first_name,
                    ordered_items: pending.ordered_items,
                })
            }
            Err(e) => SubmitOutcome::Failed(e),
        }
    }

    /// Back to a freshly mounted form. Any in-flight submission becomes stale.
    pub fn reset(&mut self) {
        self.draft.reset();
        self.errors.clear();
        self.phase = FormPhase::Idle;
        self.ticket = self.ticket.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;
    use crate::validation::FormField;

    fn filled_form() -> OrderForm {
        let mut form = OrderForm::new();
        form.set_first_name("John");
        form.set_last_name("Doe");
        form.set_address("123 Main St");
        form.update_quantity(ProductId::MrMild, "2");
        form
    }

    #[test]
    fn discarded_quantity_moves_input_revision() {
        let mut form = OrderForm::new();
        assert!(form.update_quantity(ProductId::MrMild, "10"));
        let before = form.input_revision(ProductId::MrMild);

        assert!(!form.update_quantity(ProductId::MrMild, "101"));
        assert_eq!(form.draft().quantities.get(ProductId::MrMild), 10);
        assert_ne!(form.input_revision(ProductId::MrMild), before);

        // A redraw is needed even though the draft is unchanged.
        let snapshot = form.clone();
        assert!(!form.update_quantity(ProductId::MrMild, "-1"));
        assert_ne!(form, snapshot);
    }

    #[test]
    fn accepted_quantity_keeps_input_revision() {
        let mut form = OrderForm::new();
        assert!(form.update_quantity(ProductId::HolyJalapeno, "3"));
        assert!(form.update_quantity(ProductId::HolyJalapeno, ""));
        assert_eq!(form.input_revision(ProductId::HolyJalapeno), 0);

        assert!(!form.update_quantity(ProductId::HolyJalapeno, "abc"));
        assert_eq!(form.input_revision(ProductId::HolyJalapeno), 1);
        assert_eq!(form.input_revision(ProductId::MrMild), 0);
        assert_eq!(form.input_revision(ProductId::HornyHabanero), 0);
    }

    #[test]
    fn invalid_submit_stays_idle_and_keeps_errors() {
        let mut form = OrderForm::new();
        let rejected = form.begin_submit().unwrap_err();
        match rejected {
            SubmitRejected::Invalid(errors) => assert_eq!(errors.len(), 4),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.errors().contains(FormField::Products));
    }

    #[test]
    fn second_begin_is_rejected_while_submitting() {
        let mut form = filled_form();
        let _pending = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit().unwrap_err(), SubmitRejected::InProgress);
    }

    #[test]
    fn success_resets_draft_and_confirms() {
        let mut form = filled_form();
        let pending = form.begin_submit().unwrap();
        assert_eq!(pending.ordered_items, "2 x Mr. Mild");

        let outcome = form.complete(pending, Ok(()));
        let SubmitOutcome::Confirmed(confirmation) = &outcome else {
            panic!("expected confirmation, got {:?}", outcome);
        };
        assert_eq!(
            confirmation.message(),
            "Thank you John! Your order for 2 x Mr. Mild has been received."
        );
        assert_eq!(form.draft(), &OrderDraft::default());
        assert!(form.errors().is_empty());
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn failure_keeps_draft() {
        let mut form = filled_form();
        let before = form.draft().clone();
        let pending = form.begin_submit().unwrap();

        let outcome = form.complete(pending, Err(OrderError::Network("offline".into())));
        assert!(matches!(outcome, SubmitOutcome::Failed(OrderError::Network(_))));
        assert_eq!(form.draft(), &before);
        assert!(!form.is_submitting());

        let toast = outcome.notification().unwrap();
        assert_eq!(toast.title, FAILURE_TITLE);
        assert_eq!(toast.severity, Severity::Destructive);
    }

    #[test]
    fn reset_makes_pending_stale() {
        let mut form = filled_form();
        let pending = form.begin_submit().unwrap();
        form.reset();
        form.set_first_name("Jane");

        let outcome = form.complete(pending, Ok(()));
        assert!(matches!(outcome, SubmitOutcome::Abandoned));
        assert_eq!(form.draft().first_name, "Jane");
    }

    #[test]
    fn confirmation_uses_name_at_submit_time() {
        let mut form = filled_form();
        let pending = form.begin_submit().unwrap();
        form.set_first_name("Edited");

        let outcome = form.complete(pending, Ok(()));
        let toast = outcome.notification().unwrap();
        assert!(toast.description.contains("John"));
        assert_eq!(toast.severity, Severity::Default);
    }
}
