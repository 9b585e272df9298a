//! UI Components for the storefront.

mod order_dialog;
mod order_form;
mod product_showcase;

pub use order_dialog::OrderDialog;
pub use order_form::OrderForm;
pub use product_showcase::ProductShowcase;
