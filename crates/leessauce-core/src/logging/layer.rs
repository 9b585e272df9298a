//! Tracing layer that copies audit events into the JSONL trail, and the
//! builder that installs the global subscriber.

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::filter::{filter_fn, EnvFilter};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use super::entry::AuditEntry;
use super::writer::AuditLogWriter;
use super::AUDIT_TARGET;
use crate::error::{OrderError, OrderResult};

fn is_audit(metadata: &Metadata<'_>) -> bool {
    metadata.target() == AUDIT_TARGET
}

/// Writes every event on [`AUDIT_TARGET`] to the audit file. Other events
/// are ignored.
pub struct AuditLayer {
    writer: Arc<AuditLogWriter>,
}

impl AuditLayer {
    pub fn new(logs_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        Ok(Self {
            writer: Arc::new(AuditLogWriter::new(logs_dir)?),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }
}

impl<S> Layer<S> for AuditLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !is_audit(metadata) {
            return;
        }

        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let level = metadata.level().as_str().to_lowercase();
        let mut entry = AuditEntry::new(level, visitor.message.unwrap_or_default());

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<_> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        // Write errors are dropped; logging must not panic
        let _ = self.writer.write(&entry);
    }
}

#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn put(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);
        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.put(field, buf.into());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.put(field, value.into());
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.put(field, serde_json::Value::Number(n));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, value.to_string().into());
    }
}

/// Builder for the global tracing subscriber.
pub struct LoggingBuilder {
    audit_dir: Option<PathBuf>,
    env_filter: String,
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            audit_dir: None,
            env_filter: crate::config::StoreConfig::DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Enable the JSONL audit trail under `dir`.
    pub fn with_audit_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.audit_dir = Some(dir.into());
        self
    }

    /// Console filter used when `RUST_LOG` is not set.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = filter.into();
        self
    }

    /// Build the audit layer on its own, for manual composition.
    pub fn build_audit_layer(&self) -> std::io::Result<Option<AuditLayer>> {
        self.audit_dir.as_ref().map(AuditLayer::new).transpose()
    }

    /// Install the global subscriber. Returns the audit file path, if any.
    pub fn init(self) -> OrderResult<Option<PathBuf>> {
        let audit = self.build_audit_layer()?;
        let audit_path = audit.as_ref().map(|layer| layer.log_path().to_path_buf());

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.env_filter))
            .map_err(|e| OrderError::Logging(e.to_string()))?;
        let console = tracing_subscriber::fmt::layer().with_filter(filter);

        tracing_subscriber::registry()
            .with(console)
            .with(audit.map(|layer| layer.with_filter(filter_fn(is_audit))))
            .try_init()
            .map_err(|e| OrderError::Logging(e.to_string()))?;

        Ok(audit_path)
    }
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::read_entries;
    use tempfile::TempDir;

    #[test]
    fn audit_layer_keeps_only_audit_events() {
        let temp = TempDir::new().unwrap();
        let layer = AuditLayer::new(temp.path()).unwrap();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Ordinary message");
            tracing::info!(target: AUDIT_TARGET, ticket = 7u64, items = "1 x Mr. Mild", "Order submitted");
        });

        let entries = read_entries(temp.path()).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.msg, "Order submitted");
        assert_eq!(entry.level, "info");
        assert_eq!(entry.field("ticket"), Some(&serde_json::Value::from(7u64)));
        assert_eq!(entry.field("items"), Some(&serde_json::Value::from("1 x Mr. Mild")));
    }

    #[test]
    fn audit_layer_records_span_path() {
        let temp = TempDir::new().unwrap();
        let subscriber = tracing_subscriber::registry().with(AuditLayer::new(temp.path()).unwrap());

        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("checkout");
            let _guard = span.enter();
            tracing::info!(target: AUDIT_TARGET, "Order submitted");
        });

        let entries = read_entries(temp.path()).unwrap();
        assert_eq!(entries[0].span.as_deref(), Some("checkout"));
    }

    #[test]
    fn builder_without_dir_has_no_audit_layer() {
        assert!(LoggingBuilder::new().build_audit_layer().unwrap().is_none());
    }
}
