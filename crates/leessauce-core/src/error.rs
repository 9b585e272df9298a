//! Error types for order intake

use thiserror::Error;

/// Main error type for order intake operations
#[derive(Error, Debug)]
pub enum OrderError {
    /// A product key outside the catalog
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// The order service could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The order service is up but refused to take orders
    #[error("Order service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The order service looked at the order and declined it
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// The global tracing subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// General I/O error (audit log)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using OrderError
pub type OrderResult<T> = Result<T, OrderError>;
