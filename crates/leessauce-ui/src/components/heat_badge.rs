//! Heat Indicators
//!
//! Two renderings of a sauce's [`HeatLevel`]:
//! - `HeatBadge`: rounded pill with the heat label ("Extra Hot"), used in
//!   the product grid
//! - `PepperMeter`: the pepper emoji row, used next to names in the form

use dioxus::prelude::*;
use leessauce_core::HeatLevel;

/// CSS modifier for a heat level, so hotter sauces glow redder.
pub fn heat_class(heat: HeatLevel) -> &'static str {
    match heat {
        HeatLevel::Mild => "heat--mild",
        HeatLevel::Medium => "heat--medium",
        HeatLevel::ExtraHot => "heat--hot",
    }
}

#[component]
pub fn HeatBadge(heat: HeatLevel) -> Element {
    let modifier = heat_class(heat);
    let label = heat.label();

    rsx! {
        span { class: "heat-badge {modifier}", "{label}" }
    }
}

#[component]
pub fn PepperMeter(heat: HeatLevel) -> Element {
    let label = heat.label();
    let peppers = heat.peppers();

    rsx! {
        span {
            class: "pepper-meter",
            role: "img",
            "aria-label": "Heat: {label}",
            "{peppers}"
        }
    }
}
