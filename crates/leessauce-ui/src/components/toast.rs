//! Toast Notifications
//!
//! Stacked notifications in the bottom-right corner. The list itself is
//! owned by the app shell; this module only renders it.

use dioxus::prelude::*;
use leessauce_core::Notification;

/// A notification on screen, keyed for dismissal.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, PartialEq, Props)]
pub struct ToastViewportProps {
    pub toasts: Vec<Toast>,
    /// Called with the toast id when its close button is clicked
    pub on_dismiss: EventHandler<u64>,
}

#[component]
pub fn ToastViewport(props: ToastViewportProps) -> Element {
    rsx! {
        ol { class: "toast-viewport", "aria-live": "polite",
            for toast in props.toasts.iter() {
                {
                    let id = toast.id;
                    let on_dismiss = props.on_dismiss;
                    let severity = toast.notification.severity.class();
                    rsx! {
                        li {
                            key: "{id}",
                            class: "toast {severity}",
                            role: "status",
                            div { class: "toast-body",
                                p { class: "toast-title", "{toast.notification.title}" }
                                p { class: "toast-description", "{toast.notification.description}" }
                            }
                            button {
                                class: "icon-btn toast-close",
                                r#type: "button",
                                "aria-label": "Dismiss",
                                onclick: move |_| on_dismiss.call(id),
                                "\u{00D7}"
                            }
                        }
                    }
                }
            }
        }
    }
}
