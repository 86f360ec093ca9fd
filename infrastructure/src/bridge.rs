//! Bridge from `tracing` events to a [`Logger`].
//!
//! Installs a subscriber layer so that every `tracing` event of the host
//! application is dispatched through the composed pipeline. The event's
//! target becomes the logger name and its fields become record fields.
//! Events from logweave's own crates are not forwarded.

use logweave_application::{CallSite, Field, Logger, Record};
use logweave_domain::Severity;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::field::{Field as TracingField, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Crates whose diagnostics must not feed back into the pipeline
const INTERNAL_CRATES: [&str; 4] = [
    "logweave_domain",
    "logweave_application",
    "logweave_infrastructure",
    "logweave_presentation",
];

fn is_internal(target: &str) -> bool {
    INTERNAL_CRATES.iter().any(|krate| {
        target
            .strip_prefix(krate)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

/// `tracing` layer that forwards events into a [`Logger`]
pub struct TracingBridge {
    logger: Logger,
}

impl TracingBridge {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

/// TRACE folds into Debug; the pipeline has no finer level.
pub fn severity_for(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warn,
        Level::INFO => Severity::Info,
        _ => Severity::Debug,
    }
}

impl<S: Subscriber> Layer<S> for TracingBridge {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_internal(metadata.target()) {
            return;
        }
        let severity = severity_for(metadata.level());
        if !self.logger.enabled(severity) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut record = Record::new(severity, visitor.message.unwrap_or_default())
            .with_name(metadata.target())
            .with_fields(visitor.fields);
        if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
            record = record.with_call_site(CallSite::new(file, line));
        }
        self.logger.dispatch(record);
    }
}

/// Install the bridge as the global default subscriber.
///
/// `filter` narrows which events are forwarded; `None` forwards all.
pub fn install_tracing_bridge(
    logger: Logger,
    filter: Option<EnvFilter>,
) -> Result<(), BridgeError> {
    let filter = filter.unwrap_or_else(|| EnvFilter::new("trace"));
    tracing_subscriber::registry()
        .with(TracingBridge::new(logger).with_filter(filter))
        .try_init()
        .map_err(|e| BridgeError::AlreadyInstalled(e.to_string()))
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<Field>,
}

impl FieldVisitor {
    fn push(&mut self, field: &TracingField, value: Value) {
        if field.name() == "message" {
            self.message = Some(match value {
                Value::String(s) => s,
                other => other.to_string(),
            });
        } else {
            self.fields.push(Field::new(field.name(), value));
        }
    }
}

impl Visit for FieldVisitor {
    fn record_f64(&mut self, field: &TracingField, value: f64) {
        self.push(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &TracingField, value: i64) {
        self.push(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &TracingField, value: u64) {
        self.push(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &TracingField, value: bool) {
        self.push(field, Value::from(value));
    }

    fn record_str(&mut self, field: &TracingField, value: &str) {
        self.push(field, Value::from(value));
    }

    fn record_error(&mut self, field: &TracingField, value: &(dyn std::error::Error + 'static)) {
        self.push(field, Value::from(value.to_string()));
    }

    fn record_debug(&mut self, field: &TracingField, value: &dyn fmt::Debug) {
        self.push(field, Value::from(format!("{value:?}")));
    }
}
