//! Input Field Components
//!
//! Labelled text inputs with an inline error line, and the numeric
//! quantity input used per sauce in the order form.

use dioxus::prelude::*;
use leessauce_core::MAX_QUANTITY;

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Element id, also used for the label's `for`
    pub id: String,
    pub label: String,
    /// Current input value
    pub value: String,
    /// Handler called with the new text on every keystroke
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Validation message shown under the input
    #[props(default)]
    pub error: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Text input with label and optional error message
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextField {
///         id: "firstName".to_string(),
///         label: "First Name".to_string(),
///         value: first_name(),
///         oninput: move |s| first_name.set(s),
///         placeholder: "John".to_string(),
///         error: errors.get(FormField::FirstName).map(str::to_string),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let has_error = props.error.is_some();

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                class: if has_error { "input-field input-field--invalid" } else { "input-field" },
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                "aria-invalid": if has_error { "true" } else { "false" },
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                FieldError { message: error.clone() }
            }
        }
    }
}

/// Red validation line under a field or group.
#[component]
pub fn FieldError(message: String) -> Element {
    rsx! {
        p { class: "field-error", role: "alert", "{message}" }
    }
}

/// Properties for the QuantityInput component
#[derive(Clone, PartialEq, Props)]
pub struct QuantityInputProps {
    pub id: String,
    /// Current quantity
    pub value: u32,
    /// Raw text from the field; parsing is left to the caller
    pub oninput: EventHandler<String>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Number input bounded to `0..=MAX_QUANTITY`
#[component]
pub fn QuantityInput(props: QuantityInputProps) -> Element {
    rsx! {
        div { class: "quantity-input",
            label { class: "input-label input-label--inline", r#for: "{props.id}", "Qty:" }
            input {
                id: "{props.id}",
                class: "input-field input-field--qty",
                r#type: "number",
                min: "0",
                max: "{MAX_QUANTITY}",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
