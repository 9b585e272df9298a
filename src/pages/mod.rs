//! Page components for the storefront.

mod landing;

pub use landing::Landing;
