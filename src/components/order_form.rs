//! Order Form - customer details and sauce quantities
//!
//! Thin view over an [`OrderSession`]. Every edit goes through the session
//! and the rendered state is a snapshot taken right after it.

use dioxus::prelude::*;
use leessauce_core::{products, FormField, OrderForm as FormState, OrderSession, SubmitOutcome};
use leessauce_ui::{Button, ButtonSize, FieldError, PepperMeter, QuantityInput, TextField};

use crate::context::{use_order_service, use_toaster};

/// Session plus the signal mirroring its form state.
#[derive(Clone)]
struct FormHandle {
    session: OrderSession,
    view: Signal<FormState>,
}

impl FormHandle {
    fn refresh(&mut self) {
        self.view.set(self.session.snapshot());
    }

    fn edit(&mut self, f: impl FnOnce(&mut FormState)) {
        self.session.edit(f);
        self.refresh();
    }
}

/// Order form
///
/// Owns its draft for as long as it is mounted. Unmounting closes the
/// session, which resets the draft and abandons any order still in flight.
///
/// `on_success` fires once per confirmed order, after the toast is shown.
#[component]
pub fn OrderForm(#[props(default)] on_success: Option<EventHandler<()>>) -> Element {
    let service = use_order_service();
    let mut toaster = use_toaster();

    let session = use_hook(move || OrderSession::new(service));
    let view = use_signal({
        let session = session.clone();
        move || session.snapshot()
    });
    let handle = FormHandle {
        session: session.clone(),
        view,
    };

    use_drop(move || session.close());

    let on_submit = {
        let mut handle = handle.clone();
        move |_| match handle.session.begin() {
            Err(outcome) => {
                handle.refresh();
                if let SubmitOutcome::Invalid(errors) = outcome {
                    tracing::debug!(%errors, "Order form has errors");
                }
            }
            Ok(in_flight) => {
                handle.refresh();
                let mut handle = handle.clone();
                spawn(async move {
                    let outcome = in_flight.finish().await;
                    if matches!(outcome, SubmitOutcome::Abandoned) {
                        return;
                    }
                    handle.refresh();
                    if let Some(notification) = outcome.notification() {
                        toaster.push(notification);
                    }
                    if outcome.is_confirmed() {
                        if let Some(on_success) = on_success {
                            on_success.call(());
                        }
                    }
                });
            }
        }
    };

    let form = view();
    let draft = form.draft();
    let errors = form.errors();
    let busy = form.is_submitting();
    let error_for = |field: FormField| errors.get(field).map(str::to_string);

    rsx! {
        div { class: "order-form",
            div { class: "form-grid",
                TextField {
                    id: "firstName".to_string(),
                    label: "First Name".to_string(),
                    value: draft.first_name.clone(),
                    placeholder: "John".to_string(),
                    error: error_for(FormField::FirstName),
                    oninput: {
                        let mut handle = handle.clone();
                        move |value: String| handle.edit(|f| f.set_first_name(value))
                    },
                }
                TextField {
                    id: "lastName".to_string(),
                    label: "Last Name".to_string(),
                    value: draft.last_name.clone(),
                    placeholder: "Doe".to_string(),
                    error: error_for(FormField::LastName),
                    oninput: {
                        let mut handle = handle.clone();
                        move |value: String| handle.edit(|f| f.set_last_name(value))
                    },
                }
            }

            TextField {
                id: "address".to_string(),
                label: "Delivery Address".to_string(),
                value: draft.address.clone(),
                placeholder: "123 Main St, City, State, ZIP".to_string(),
                error: error_for(FormField::Address),
                oninput: {
                    let mut handle = handle.clone();
                    move |value: String| handle.edit(|f| f.set_address(value))
                },
            }

            div { class: "form-section",
                label { class: "input-label input-label--section", "Select Sauces & Quantities" }
                if let Some(message) = error_for(FormField::Products) {
                    FieldError { message: message }
                }

                div { class: "sauce-rows",
                    for product in products() {
                        {
                            let id = product.id;
                            // A new key remounts the row, so discarded input
                            // is replaced by the kept quantity.
                            let revision = form.input_revision(id);
                            let mut handle = handle.clone();
                            rsx! {
                                div { key: "{id}-{revision}", class: "sauce-row",
                                    img { class: "sauce-row-image", src: "{product.image}", alt: "{product.name}" }
                                    div { class: "sauce-row-body",
                                        div { class: "sauce-row-title",
                                            h4 { "{product.name}" }
                                            PepperMeter { heat: product.heat }
                                        }
                                        p { class: "sauce-row-description", "{product.description}" }
                                    }
                                    QuantityInput {
                                        id: format!("qty-{}", id),
                                        value: draft.quantities.get(id),
                                        oninput: move |raw: String| handle.edit(|f| {
                                            f.update_quantity(id, &raw);
                                        }),
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Button {
                size: ButtonSize::Block,
                disabled: busy,
                onclick: on_submit,
                if busy { "Processing..." } else { "Place Order" }
            }
        }
    }
}
