//! Sink: a destination bound to a severity floor

use crate::pipeline::record::Record;
use crate::ports::encoder::RecordEncoder;
use crate::ports::writer::{LogWriter, WriteError};
use logweave_domain::{Encoding, Severity};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// What a sink writes to, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    Console,
    File(PathBuf),
}

impl fmt::Display for SinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkTarget::Console => write!(f, "console"),
            SinkTarget::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// A (destination, severity floor) pair with the encoder that feeds it.
///
/// Accepts a record iff `record.severity >= floor`.
pub struct Sink {
    target: SinkTarget,
    floor: Severity,
    encoder: Arc<dyn RecordEncoder>,
    writer: Arc<dyn LogWriter>,
}

impl Sink {
    pub fn new(
        target: SinkTarget,
        floor: Severity,
        encoder: Arc<dyn RecordEncoder>,
        writer: Arc<dyn LogWriter>,
    ) -> Self {
        Self {
            target,
            floor,
            encoder,
            writer,
        }
    }

    pub fn target(&self) -> &SinkTarget {
        &self.target
    }

    pub fn floor(&self) -> Severity {
        self.floor
    }

    pub fn accepts(&self, severity: Severity) -> bool {
        severity >= self.floor
    }

    /// Encode and append a record. Records below the floor are skipped.
    pub fn write(&self, record: &Record) -> Result<(), WriteError> {
        if !self.accepts(record.severity) {
            return Ok(());
        }
        let bytes = self.encoder.render(record);
        self.writer.append(&bytes)
    }

    pub fn flush(&self) -> Result<(), WriteError> {
        self.writer.flush()
    }

    pub fn close(&self) {
        self.writer.close();
    }

    pub fn summary(&self) -> SinkSummary {
        SinkSummary {
            target: self.target.clone(),
            floor: self.floor,
            encoding: self.encoder.encoding(),
            colored: self.encoder.is_colored(),
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("target", &self.target)
            .field("floor", &self.floor)
            .field("encoding", &self.encoder.encoding())
            .finish()
    }
}

/// Description of a composed sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkSummary {
    pub target: SinkTarget,
    pub floor: Severity,
    pub encoding: Encoding,
    pub colored: bool,
}

impl fmt::Display for SinkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (floor: {}, encoding: {}{})",
            self.target,
            self.floor,
            self.encoding,
            if self.colored { ", colored" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::writer::MemoryWriter;
    use crate::testing::PlainEncoder;

    fn sink(floor: Severity, writer: &MemoryWriter) -> Sink {
        Sink::new(
            SinkTarget::Console,
            floor,
            Arc::new(PlainEncoder::console()),
            Arc::new(writer.clone()),
        )
    }

    #[test]
    fn test_accepts_at_or_above_floor() {
        let writer = MemoryWriter::new();
        let sink = sink(Severity::Warn, &writer);

        for severity in Severity::ALL {
            assert_eq!(sink.accepts(severity), severity >= Severity::Warn);
        }
    }

    #[test]
    fn test_write_skips_records_below_floor() {
        let writer = MemoryWriter::new();
        let sink = sink(Severity::Error, &writer);

        sink.write(&Record::new(Severity::Info, "quiet")).unwrap();
        sink.write(&Record::new(Severity::Error, "loud")).unwrap();

        assert_eq!(writer.lines(), vec!["ERROR loud"]);
    }

    #[test]
    fn test_summary_display() {
        let writer = MemoryWriter::new();
        let file = Sink::new(
            SinkTarget::File(PathBuf::from("/tmp/app.log")),
            Severity::Info,
            Arc::new(PlainEncoder::json()),
            Arc::new(writer),
        );
        let summary = file.summary();
        assert_eq!(summary.encoding, Encoding::Json);
        assert!(!summary.colored);
        assert_eq!(
            summary.to_string(),
            "file /tmp/app.log (floor: info, encoding: json)"
        );
    }
}
