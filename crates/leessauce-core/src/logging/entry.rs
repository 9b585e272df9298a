//! One line of the audit trail.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A self-contained audit record, serialized as a single JSON line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// RFC 3339 timestamp with milliseconds (e.g. "2026-10-19T14:30:45.123Z")
    pub ts: String,

    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Human-readable message
    pub msg: String,

    /// Structured fields recorded with the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Enclosing span path, root first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl AuditEntry {
    /// Create an entry stamped with the current time.
    pub fn new(level: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Look up a recorded field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.as_ref()?.get(name)
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
