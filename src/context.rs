//! Context providers for the storefront.
//!
//! The app shell provides the order service and the toaster; any component
//! below it can pick them up.
//!
//! ## Usage
//!
//! ```ignore
//! let service = use_order_service();
//! let mut toaster = use_toaster();
//! toaster.push(Notification::new("Order Received!", "Thank you!"));
//! ```

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use leessauce_core::{Notification, OrderService, StoreConfig};
use leessauce_ui::Toast;

/// Shared order service type for context.
pub type SharedOrderService = Arc<dyn OrderService>;

/// Get the storefront settings.
/// Uses the global settings set from command line args.
pub fn get_config() -> StoreConfig {
    crate::get_config()
}

/// Hook to access the order service from context.
pub fn use_order_service() -> SharedOrderService {
    use_context::<SharedOrderService>()
}

/// Pushes toasts onto the app-wide stack and removes them after a while.
///
/// Copyable handle over signals owned by the app shell, so it can be moved
/// into event handlers and spawned tasks freely.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
    lifetime: Duration,
}

impl Toaster {
    pub fn new(toasts: Signal<Vec<Toast>>, next_id: Signal<u64>, lifetime: Duration) -> Self {
        Self {
            toasts,
            next_id,
            lifetime,
        }
    }

    /// Show a notification.
    ///
    /// The dismissal timer runs on the root scope, so it still fires after
    /// the component that raised the toast has unmounted.
    pub fn push(&mut self, notification: Notification) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        tracing::debug!(id, title = %notification.title, "Showing toast");
        self.toasts.write().push(Toast { id, notification });

        let mut toasts = self.toasts;
        let lifetime = self.lifetime;
        spawn_forever(async move {
            tokio::time::sleep(lifetime).await;
            toasts.write().retain(|toast| toast.id != id);
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}

/// Hook to access the toaster from context.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}
