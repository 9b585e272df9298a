//! The order-processing seam.
//!
//! There is no real order-management backend. [`SimulatedOrderService`]
//! records the order in the audit trail and answers after a fixed delay;
//! a real integration implements [`OrderService`] and defines its own
//! failure cases (network, rejection, outage) through [`OrderError`].

use std::time::Duration;

use async_trait::async_trait;

use crate::config::StoreConfig;
use crate::error::{OrderError, OrderResult};
use crate::form::PendingOrder;
use crate::logging::AUDIT_TARGET;

/// Accepts validated orders.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn place_order(&self, order: &PendingOrder) -> OrderResult<()>;
}

/// Stand-in order service: audit log, sleep, answer.
#[derive(Debug, Clone)]
pub struct SimulatedOrderService {
    delay: Duration,
    reject: bool,
}

impl SimulatedOrderService {
    /// Delay used when nothing else is configured.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            reject: false,
        }
    }

    /// Make every order fail after the delay.
    pub fn rejecting(mut self) -> Self {
        self.reject = true;
        self
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        let service = Self::new(config.submit_delay);
        if config.reject_orders {
            service.rejecting()
        } else {
            service
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedOrderService {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

/// JSON of the submitted draft for the audit trail, or a marker when it
/// cannot be serialised.
fn audit_draft(order: &PendingOrder) -> String {
    match serde_json::to_string(&order.draft) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(ticket = order.ticket(), error = %e, "Could not serialise order draft");
            UNSERIALISABLE_DRAFT.to_string()
        }
    }
}

const UNSERIALISABLE_DRAFT: &str = "<unserialisable>";

#[async_trait]
impl OrderService for SimulatedOrderService {
    async fn place_order(&self, order: &PendingOrder) -> OrderResult<()> {
        let draft = audit_draft(order);
        tracing::info!(
            target: AUDIT_TARGET,
            ticket = order.ticket(),
            draft = %draft,
            items = %order.ordered_items,
            "Order submitted"
        );

        tokio::time::sleep(self.delay).await;

        if self.reject {
            tracing::warn!(ticket = order.ticket(), "Simulated order service rejected order");
            return Err(OrderError::ServiceUnavailable(
                "simulated order service is rejecting orders".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;
    use crate::form::OrderForm;

    fn pending() -> PendingOrder {
        let mut form = OrderForm::new();
        form.set_first_name("Ada");
        form.set_last_name("Lovelace");
        form.set_address("12 Analytical Row");
        form.update_quantity(ProductId::HornyHabanero, "3");
        form.begin_submit().unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_configured_delay() {
        let service = SimulatedOrderService::default();
        let start = tokio::time::Instant::now();
        service.place_order(&pending()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn rejecting_service_fails() {
        let service = SimulatedOrderService::new(Duration::from_millis(10)).rejecting();
        let err = service.place_order(&pending()).await.unwrap_err();
        assert!(matches!(err, OrderError::ServiceUnavailable(_)));
    }

    #[test]
    fn audit_draft_is_the_submitted_draft() {
        let order = pending();
        let json: serde_json::Value = serde_json::from_str(&audit_draft(&order)).unwrap();
        assert_eq!(json["first_name"], "Ada");
        assert_eq!(json["quantities"]["horny-habanero"], 3);
        assert_ne!(audit_draft(&order), UNSERIALISABLE_DRAFT);
    }

    #[tokio::test(start_paused = true)]
    async fn submitted_order_lands_in_audit_trail() {
        use crate::logging::{read_entries, AuditLayer};
        use tracing_subscriber::layer::SubscriberExt;

        let temp = tempfile::TempDir::new().unwrap();
        let subscriber =
            tracing_subscriber::registry().with(AuditLayer::new(temp.path()).unwrap());
        let _guard = tracing::subscriber::set_default(subscriber);

        SimulatedOrderService::new(Duration::from_millis(10))
            .place_order(&pending())
            .await
            .unwrap();

        let entries = read_entries(temp.path()).unwrap();
        assert_eq!(entries.len(), 1);
        let draft = entries[0].field("draft").and_then(|v| v.as_str()).unwrap();
        assert!(draft.contains("Lovelace"));
        assert_eq!(
            entries[0].field("items"),
            Some(&serde_json::Value::from("3 x Horny Habanero"))
        );
    }

    #[test]
    fn from_config_picks_up_rejection() {
        let config = StoreConfig {
            reject_orders: true,
            submit_delay: Duration::from_millis(5),
            ..StoreConfig::default()
        };
        let service = SimulatedOrderService::from_config(&config);
        assert!(service.reject);
        assert_eq!(service.delay(), Duration::from_millis(5));
    }
}
