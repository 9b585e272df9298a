//! Lee's Sauce UI Components
//!
//! Dioxus building blocks for the storefront: buttons, labelled inputs with
//! inline errors, heat indicators, the order dialog shell and the toast
//! stack.
//!
//! ## Palette
//!
//! - **Chilli (#e63b2e)**: primary actions, heat, focus rings
//! - **Ember (#f2a541)**: headings, badges
//! - **Char (#0f0d0c)**: background
//! - **Smoke (#a39e99)**: muted copy

pub mod components;

pub use components::*;
