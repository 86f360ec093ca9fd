//! Log record type

use chrono::{DateTime, Utc};
use logweave_domain::Severity;
use serde_json::Value;
use std::fmt;
use std::panic::Location;

/// A structured key/value attached to a record
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: Value,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Source location of the call that emitted a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the caller of the current `#[track_caller]` chain
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// `dir/file.rs:line`: the last two path components and the line.
    pub fn short(&self) -> String {
        let mut cut = None;
        for (seen, (idx, _)) in self
            .file
            .char_indices()
            .rev()
            .filter(|(_, c)| *c == '/' || *c == '\\')
            .enumerate()
        {
            if seen == 1 {
                cut = Some(idx + 1);
                break;
            }
        }
        let tail = cut.map_or(self.file, |idx| &self.file[idx..]);
        format!("{}:{}", tail, self.line)
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}

/// One log event on its way through the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    /// Dotted logger name (see [`crate::Logger::named`])
    pub logger_name: Option<String>,
    /// Present only when call-site capture is enabled
    pub call_site: Option<CallSite>,
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            timestamp: Utc::now(),
            message: message.into(),
            logger_name: None,
            call_site: None,
            fields: Vec::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.logger_name = Some(name.into());
        self
    }

    pub fn with_call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field::new(key, value));
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }
}
