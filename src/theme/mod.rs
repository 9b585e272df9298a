//! Theme for the storefront.

mod styles;

pub use styles::GLOBAL_STYLES;
