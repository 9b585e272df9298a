//! Lee's Sauce Core Library
//!
//! Catalog data and the order-intake workflow behind the storefront's
//! "Place Your Order" dialog.
//!
//! ## Overview
//!
//! The storefront sells three sauces. A customer fills in their name, a
//! delivery address and per-sauce quantities; the draft is validated, handed
//! to an [`OrderService`], and answered with a confirmation or a generic
//! failure notice. There is no real order backend: [`SimulatedOrderService`]
//! writes the order to the audit trail and answers after a short delay.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use leessauce_core::{OrderSession, ProductId, SimulatedOrderService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let session = OrderSession::new(Arc::new(SimulatedOrderService::default()));
//!
//!     session.edit(|form| {
//!         form.set_first_name("John");
//!         form.set_last_name("Doe");
//!         form.set_address("123 Main St");
//!         form.update_quantity(ProductId::MrMild, "2");
//!     });
//!
//!     if let Some(toast) = session.submit().await.notification() {
//!         println!("{}: {}", toast.title, toast.description);
//!     }
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod draft;
pub mod error;
pub mod form;
pub mod logging;
pub mod notify;
pub mod service;
pub mod session;
pub mod validation;

// Re-exports
pub use catalog::{products, HeatLevel, Product, ProductId, CATALOG};
pub use config::StoreConfig;
pub use draft::{parse_quantity, OrderDraft, Quantities, MAX_QUANTITY};
pub use error::{OrderError, OrderResult};
pub use form::{FormPhase, OrderConfirmation, OrderForm, PendingOrder, SubmitOutcome, SubmitRejected};
pub use notify::{Notification, Severity};
pub use service::{OrderService, SimulatedOrderService};
pub use session::{InFlightOrder, OrderSession};
pub use validation::{validate, FormField, ValidationErrors, MIN_ADDRESS_LEN};
