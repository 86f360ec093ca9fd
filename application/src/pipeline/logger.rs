//! The logger handle handed to the host application.
//!
//! A [`Logger`] is cheap to clone and safe to share across threads. Clones
//! made through [`Logger::named`] or [`Logger::with_fields`] share the same
//! core; the destinations are drained once, when [`Logger::close`] is
//! called or the last clone is dropped.

use crate::pipeline::core::{LogCore, SinkFailure};
use crate::pipeline::record::{CallSite, Field, Record};
use crate::pipeline::sink::SinkSummary;
use crate::ports::writer::LogWriter;
use logweave_domain::Severity;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Construction options for [`Logger`]
#[derive(Clone, Default)]
pub struct LoggerOptions {
    /// Attach the emitting call site to every record
    pub capture_call_site: bool,
    /// Where sink failures are reported; `None` discards them
    pub error_output: Option<Arc<dyn LogWriter>>,
}

struct Shared {
    core: LogCore,
    capture_call_site: bool,
    error_output: Option<Arc<dyn LogWriter>>,
    closed: AtomicBool,
}

impl Shared {
    fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            for failure in self.core.flush() {
                self.report(&failure);
            }
            self.core.close();
        }
    }

    fn report(&self, failure: &SinkFailure) {
        if let Some(output) = &self.error_output {
            failure.report(output.as_ref());
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.close();
    }
}

/// Structured logger over a composed [`LogCore`]
#[derive(Clone)]
pub struct Logger {
    shared: Arc<Shared>,
    name: Option<Arc<str>>,
    fields: Arc<[Field]>,
}

impl Logger {
    pub fn new(core: LogCore, options: LoggerOptions) -> Self {
        Self {
            shared: Arc::new(Shared {
                core,
                capture_call_site: options.capture_call_site,
                error_output: options.error_output,
                closed: AtomicBool::new(false),
            }),
            name: None,
            fields: Arc::from(Vec::new()),
        }
    }

    /// A logger with no sinks. Every record is discarded.
    pub fn disabled() -> Self {
        Self::new(LogCore::default(), LoggerOptions::default())
    }

    /// True iff some sink would accept a record of `severity`
    pub fn enabled(&self, severity: Severity) -> bool {
        self.shared.core.enabled(severity)
    }

    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        self.log_with(severity, message, Vec::new());
    }

    #[track_caller]
    pub fn log_with(&self, severity: Severity, message: impl Into<String>, fields: Vec<Field>) {
        if !self.enabled(severity) {
            return;
        }
        let mut record = Record::new(severity, message).with_fields(fields);
        if self.shared.capture_call_site {
            record.call_site = Some(CallSite::caller());
        }
        self.dispatch(record);
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Severity::Warn, message);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    /// Send a prepared record through the core.
    ///
    /// The logger's name and context fields are applied first. A call site
    /// already on the record is dropped when capture is disabled. Sink
    /// failures go to the error output, one line each.
    pub fn dispatch(&self, mut record: Record) {
        if !self.enabled(record.severity) {
            return;
        }
        if record.logger_name.is_none()
            && let Some(name) = &self.name
        {
            record.logger_name = Some(name.to_string());
        }
        if !self.fields.is_empty() {
            let mut fields = self.fields.to_vec();
            fields.append(&mut record.fields);
            record.fields = fields;
        }
        if !self.shared.capture_call_site {
            record.call_site = None;
        }

        for failure in self.shared.core.dispatch(&record) {
            self.shared.report(&failure);
        }
    }

    /// Child logger whose name is joined to this one with a dot
    pub fn named(&self, segment: &str) -> Self {
        let name: Arc<str> = match &self.name {
            Some(parent) if !segment.is_empty() => Arc::from(format!("{parent}.{segment}")),
            Some(parent) => parent.clone(),
            None => Arc::from(segment),
        };
        Self {
            shared: self.shared.clone(),
            name: Some(name),
            fields: self.fields.clone(),
        }
    }

    /// Child logger that attaches `fields` to every record
    pub fn with_fields(&self, fields: impl IntoIterator<Item = Field>) -> Self {
        let mut merged = self.fields.to_vec();
        merged.extend(fields);
        Self {
            shared: self.shared.clone(),
            name: self.name.clone(),
            fields: Arc::from(merged),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn captures_call_site(&self) -> bool {
        self.shared.capture_call_site
    }

    pub fn sinks(&self) -> Vec<SinkSummary> {
        self.shared.core.summaries()
    }

    /// Flush every sink, reporting failures to the error output.
    pub fn flush(&self) {
        for failure in self.shared.core.flush() {
            self.shared.report(&failure);
        }
    }

    /// Drain pending writes and release every destination.
    ///
    /// Idempotent. Records logged afterwards may be lost.
    pub fn close(&self) {
        self.shared.close();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("sinks", &self.shared.core.len())
            .field("capture_call_site", &self.shared.capture_call_site)
            .finish()
    }
}
