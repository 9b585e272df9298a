//! Button Components
//!
//! Button styles used across the storefront:
//! - Primary: filled chilli red, main calls to action
//! - Outline: red border, secondary actions ("Learn More")

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled primary action
    #[default]
    Primary,
    /// Bordered secondary action
    Outline,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    /// Hero and call-to-action buttons
    Large,
    /// Full width of the container (form submit)
    Block,
}

impl ButtonSize {
    pub fn class(&self) -> Option<&'static str> {
        match self {
            ButtonSize::Default => None,
            ButtonSize::Large => Some("btn-lg"),
            ButtonSize::Block => Some("btn-block"),
        }
    }
}

/// Join a base class with optional extras, skipping empty parts.
pub(crate) fn class_list(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Render as a link to this target instead of a `<button>`
    #[props(default)]
    pub href: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         size: ButtonSize::Large,
///         onclick: move |_| dialog_open.set(true),
///         "Shop Now"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(&[
        Some(props.variant.class()),
        props.size.class(),
        props.class.as_deref(),
    ]);

    if let Some(href) = &props.href {
        return rsx! {
            a { class: "{full_class}", href: "{href}", {props.children} }
        };
    }

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "icon-btn close-btn",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
    }

    #[test]
    fn outline_large_link_classes() {
        assert_eq!(
            class_list(&[Some(ButtonVariant::Outline.class()), ButtonSize::Large.class(), None]),
            "btn-outline btn-lg"
        );
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn class_list_skips_missing_parts() {
        assert_eq!(class_list(&[Some("btn-primary"), None, Some("")]), "btn-primary");
        assert_eq!(
            class_list(&[Some("btn-primary"), ButtonSize::Large.class(), Some("cta")]),
            "btn-primary btn-lg cta"
        );
    }
}
