//! Order Dialog - hosts the order form in a dismissible overlay

use dioxus::prelude::*;
use leessauce_ui::Dialog;

use super::OrderForm;

/// "Place Your Order" dialog.
///
/// The form only exists while the dialog is open; closing it drops the
/// form's draft.
#[component]
pub fn OrderDialog(open: bool, on_close: EventHandler<()>) -> Element {
    rsx! {
        Dialog {
            open: open,
            title: "Place Your Order".to_string(),
            description: "Fill in your details below to order Lee's Sauce".to_string(),
            on_close: on_close,
            OrderForm {
                on_success: move |_| {
                    tracing::info!("Order confirmed, closing dialog");
                    on_close.call(());
                },
            }
        }
    }
}
