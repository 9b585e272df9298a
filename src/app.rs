use std::sync::Arc;

use dioxus::prelude::*;
use leessauce_core::SimulatedOrderService;
use leessauce_ui::{Toast, ToastViewport};

use crate::context::{get_config, SharedOrderService, Toaster};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The storefront: hero, sauces, about, call to action
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, the order service, the toast stack and routing.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_config);

    // One simulated order service for the whole app
    use_context_provider(|| {
        let service: SharedOrderService = Arc::new(SimulatedOrderService::from_config(&config));
        service
    });

    let toasts = use_signal(Vec::<Toast>::new);
    let next_toast_id = use_signal(|| 0u64);
    let mut toaster =
        use_context_provider(|| Toaster::new(toasts, next_toast_id, config.toast_duration));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        ToastViewport {
            toasts: toasts(),
            on_dismiss: move |id| toaster.dismiss(id),
        }
    }
}
