//! Test doubles for the ports

use crate::pipeline::record::Record;
use crate::ports::encoder::{EncoderFactory, RecordEncoder};
use crate::ports::writer::{DestinationFactory, LogWriter, MemoryWriter, WriteError};
use logweave_domain::{Encoding, FieldTemplate, RotationPolicy};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Renders `LEVEL [name] caller message key=value`
pub(crate) struct PlainEncoder {
    encoding: Encoding,
    colored: bool,
}

impl PlainEncoder {
    pub(crate) fn console() -> Self {
        Self {
            encoding: Encoding::Console,
            colored: false,
        }
    }

    pub(crate) fn json() -> Self {
        Self {
            encoding: Encoding::Json,
            colored: false,
        }
    }
}

impl RecordEncoder for PlainEncoder {
    fn render(&self, record: &Record) -> Vec<u8> {
        let mut line = record.severity.capitalized().to_string();
        if let Some(name) = &record.logger_name {
            line.push_str(&format!(" [{name}]"));
        }
        if let Some(site) = &record.call_site {
            line.push(' ');
            line.push_str(&site.short());
        }
        line.push(' ');
        line.push_str(&record.message);
        for field in &record.fields {
            line.push_str(&format!(" {}={}", field.key, field.value));
        }
        line.push('\n');
        line.into_bytes()
    }

    fn encoding(&self) -> Encoding {
        self.encoding
    }

    fn is_colored(&self) -> bool {
        self.colored
    }
}

pub(crate) struct PlainEncoders;

impl EncoderFactory for PlainEncoders {
    fn json(&self, _template: &FieldTemplate) -> Arc<dyn RecordEncoder> {
        Arc::new(PlainEncoder::json())
    }

    fn console(&self, _template: &FieldTemplate, colored: bool) -> Arc<dyn RecordEncoder> {
        Arc::new(PlainEncoder {
            encoding: Encoding::Console,
            colored,
        })
    }
}

/// Always fails, like a full disk
pub(crate) struct FailingWriter;

impl LogWriter for FailingWriter {
    fn append(&self, _bytes: &[u8]) -> Result<(), WriteError> {
        Err(std::io::Error::other("no space left on device").into())
    }
}

/// Hands out in-memory destinations and remembers them by target
#[derive(Default)]
pub(crate) struct RecordingDestinations {
    pub(crate) stdout: MemoryWriter,
    pub(crate) errors: MemoryWriter,
    files: Mutex<Vec<(PathBuf, MemoryWriter)>>,
    failing_files: bool,
}

impl RecordingDestinations {
    pub(crate) fn with_failing_files() -> Self {
        Self {
            failing_files: true,
            ..Self::default()
        }
    }

    pub(crate) fn file(&self, path: &str) -> Option<MemoryWriter> {
        self.files.lock().ok().and_then(|files| {
            files
                .iter()
                .find(|(p, _)| p == &PathBuf::from(path))
                .map(|(_, w)| w.clone())
        })
    }

    pub(crate) fn file_count(&self) -> usize {
        self.files.lock().map(|files| files.len()).unwrap_or(0)
    }
}

impl DestinationFactory for RecordingDestinations {
    fn stdout(&self) -> Arc<dyn LogWriter> {
        Arc::new(self.stdout.clone())
    }

    fn rotating_file(&self, policy: &RotationPolicy) -> Arc<dyn LogWriter> {
        if self.failing_files {
            return Arc::new(FailingWriter);
        }
        let writer = MemoryWriter::new();
        if let Ok(mut files) = self.files.lock() {
            files.push((policy.path.clone(), writer.clone()));
        }
        Arc::new(writer)
    }

    fn error_output(&self) -> Arc<dyn LogWriter> {
        Arc::new(self.errors.clone())
    }
}
