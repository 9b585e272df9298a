//! Product Showcase - the "Our Sauces" grid

use dioxus::prelude::*;
use leessauce_core::{products, Product};
use leessauce_ui::HeatBadge;

/// One card per catalog product, in catalog order.
#[component]
pub fn ProductShowcase() -> Element {
    rsx! {
        div { class: "product-grid",
            for (index, product) in products().enumerate() {
                ProductCard { key: "{product.id}", product: product.clone(), index }
            }
        }
    }
}

/// Image, name, tagline and heat badge for one sauce.
#[component]
pub fn ProductCard(product: Product, index: usize) -> Element {
    // Stagger the fade-in across the row.
    let delay = index * 200;

    rsx! {
        article {
            class: "product-card",
            style: "animation-delay: {delay}ms;",
            div { class: "product-card-image",
                img { src: "{product.image}", alt: "{product.name}" }
            }
            div { class: "product-card-body",
                h3 { class: "product-card-name", "{product.name}" }
                p { class: "product-card-tagline", "{product.tagline}" }
                HeatBadge { heat: product.heat }
            }
        }
    }
}
