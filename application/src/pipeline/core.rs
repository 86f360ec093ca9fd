//! Fan-out logging core

use crate::pipeline::record::Record;
use crate::pipeline::sink::{Sink, SinkSummary, SinkTarget};
use crate::ports::writer::{LogWriter, WriteError};
use chrono::Utc;
use logweave_domain::Severity;
use std::fmt;

/// A write that one sink could not complete
#[derive(Debug)]
pub struct SinkFailure {
    pub target: SinkTarget,
    pub error: WriteError,
}

impl SinkFailure {
    pub fn new(target: SinkTarget, error: impl Into<WriteError>) -> Self {
        Self {
            target,
            error: error.into(),
        }
    }

    /// Append one timestamped line describing the failure to `output`.
    pub fn report(&self, output: &dyn LogWriter) {
        let line = format!(
            "{} write error: {}\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S%.6f UTC"),
            self
        );
        // Nowhere left to report a failing error output.
        let _ = output.append(line.as_bytes());
    }
}

impl fmt::Display for SinkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.target, self.error)
    }
}

/// Merges independently-filtered sinks into one write target.
///
/// Every dispatched record is offered to every sink; each sink applies
/// its own floor. A failing sink never prevents delivery to the others.
#[derive(Debug, Default)]
pub struct LogCore {
    sinks: Vec<Sink>,
}

impl LogCore {
    /// Sinks keep their insertion order.
    pub fn new(sinks: Vec<Sink>) -> Self {
        Self { sinks }
    }

    /// True iff at least one sink accepts `severity`
    pub fn enabled(&self, severity: Severity) -> bool {
        self.sinks.iter().any(|sink| sink.accepts(severity))
    }

    /// Deliver a record to every accepting sink, collecting failures.
    pub fn dispatch(&self, record: &Record) -> Vec<SinkFailure> {
        self.sinks
            .iter()
            .filter(|sink| sink.accepts(record.severity))
            .filter_map(|sink| {
                sink.write(record)
                    .err()
                    .map(|error| SinkFailure::new(sink.target().clone(), error))
            })
            .collect()
    }

    pub fn flush(&self) -> Vec<SinkFailure> {
        self.sinks
            .iter()
            .filter_map(|sink| {
                sink.flush()
                    .err()
                    .map(|error| SinkFailure::new(sink.target().clone(), error))
            })
            .collect()
    }

    pub fn close(&self) {
        for sink in &self.sinks {
            sink.close();
        }
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    pub fn summaries(&self) -> Vec<SinkSummary> {
        self.sinks.iter().map(Sink::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}
