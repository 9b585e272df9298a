//! Dialog Component
//!
//! Dismissible overlay. Clicking the backdrop, the close button or pressing
//! Escape calls `on_close`; the children are not rendered while closed, so
//! whatever they hold is dropped on dismissal.

use dioxus::prelude::*;

use super::button::CloseButton;

#[derive(Clone, PartialEq, Props)]
pub struct DialogProps {
    /// Whether the dialog is shown
    pub open: bool,
    pub title: String,
    #[props(default)]
    pub description: Option<String>,
    pub on_close: EventHandler<()>,
    pub children: Element,
}

#[component]
pub fn Dialog(props: DialogProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "dialog-content",
                role: "dialog",
                "aria-modal": "true",
                tabindex: "-1",
                onclick: move |e| e.stop_propagation(),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Escape {
                        on_close.call(());
                    }
                },

                div { class: "dialog-header",
                    h2 { class: "dialog-title", "{props.title}" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }
                if let Some(description) = &props.description {
                    p { class: "dialog-description", "{description}" }
                }

                div { class: "dialog-body", {props.children} }
            }
        }
    }
}
