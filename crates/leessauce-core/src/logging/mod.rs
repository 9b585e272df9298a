//! Logging setup and the JSONL order audit trail.
//!
//! Console logging goes through the usual `tracing-subscriber` fmt layer.
//! Events emitted on the [`AUDIT_TARGET`] target are additionally written,
//! one JSON object per line, to a dated file:
//!
//! ```text
//! <log-dir>/
//! └── orders/
//!     ├── 2026-10-18.jsonl
//!     └── 2026-10-19.jsonl
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use leessauce_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("leessauce=debug")
//!     .with_audit_dir("./logs")
//!     .init()?;
//! ```
//!
//! ```bash
//! # Everything Mr. Mild was ordered in
//! jq 'select(.fields.draft | contains("\"mr-mild\":0") | not)' logs/orders/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

/// Tracing target whose events end up in the audit trail.
pub const AUDIT_TARGET: &str = "leessauce::audit";

pub use entry::AuditEntry;
pub use layer::{AuditLayer, LoggingBuilder};
pub use writer::{read_entries, AuditLogWriter};
