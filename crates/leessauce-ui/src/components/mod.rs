//! Reusable UI components for the storefront.
//!
//! Dark background, chilli-red accents, warm gold for headings.

mod button;
mod dialog;
mod heat_badge;
mod input;
mod toast;

pub use button::*;
pub use dialog::*;
pub use heat_badge::*;
pub use input::*;
pub use toast::*;
