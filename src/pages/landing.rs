//! Landing page - the whole storefront.
//!
//! Hero, the sauce grid, the brand story, a call to action and the footer.
//! Both "Shop Now" and "Order Now" open the order dialog.

use dioxus::prelude::*;
use leessauce_ui::{Button, ButtonSize, ButtonVariant};

use crate::components::{OrderDialog, ProductShowcase};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let mut order_open = use_signal(|| false);

    let open_order = move |_| {
        tracing::debug!("Opening order dialog");
        order_open.set(true);
    };

    rsx! {
        main { class: "landing",
            // Hero
            section { class: "hero",
                div { class: "hero-glow" }
                div { class: "hero-content",
                    img {
                        class: "hero-logo fade-in-up",
                        src: "/assets/ls-logo.jpeg",
                        alt: "Lee's Sauce - Handcrafted Heat Since 2017",
                    }
                    div { class: "fade-in-up delay-200",
                        h1 { class: "page-title", "Handcrafted Heat" }
                        p { class: "tagline",
                            "Premium small-batch hot sauces crafted with passion since 2017"
                        }
                    }
                    div { class: "hero-actions fade-in-up delay-400",
                        Button { size: ButtonSize::Large, onclick: open_order, "Shop Now" }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Large,
                            href: "#about".to_string(),
                            "Learn More"
                        }
                    }
                }
            }

            // Products
            section { class: "section",
                div { class: "section-inner section-inner--wide",
                    div { class: "section-heading",
                        h2 { class: "section-header", "Our Sauces" }
                        p { class: "section-lede",
                            "Three distinct flavours, each with its own personality"
                        }
                    }
                    ProductShowcase {}
                }
            }

            // About
            section { id: "about", class: "section section--bordered",
                div { class: "section-inner",
                    h2 { class: "section-header", "Crafted with Care" }
                    p { class: "body-text",
                        "Since 2017, Lee's Sauce has been creating exceptional hot sauces using only the finest ingredients. "
                        "Each batch is carefully crafted to deliver bold flavours and the perfect amount of heat."
                    }
                    p { class: "body-text",
                        "From the divine Holy Jalapeño to the devilishly hot Horny Habanero, and the smooth Mr. Mild, "
                        "we have a sauce for every palate and every occasion."
                    }
                }
            }

            // Call to action
            section { class: "section",
                div { class: "section-inner",
                    div { class: "cta-panel",
                        h2 { class: "section-header", "Ready to Turn Up the Heat?" }
                        p { class: "section-lede", "Experience the bold flavours of Lee's Sauce today" }
                        Button { size: ButtonSize::Large, onclick: open_order, "Order Now" }
                    }
                }
            }

            footer { class: "footer",
                p { "© 2017-2025 Lee's Sauce. All rights reserved. | Handcrafted Heat Since 2017" }
            }

            OrderDialog {
                open: order_open(),
                on_close: move |_| order_open.set(false),
            }
        }
    }
}
