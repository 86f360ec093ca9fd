//! Port for log destinations.
//!
//! A [`LogWriter`] is the narrow capability a sink writes through: append
//! already-encoded bytes. How the bytes reach a terminal, a rotating file
//! or anything else is the adapter's business. [`DestinationFactory`]
//! builds the writers the pipeline needs.

use logweave_domain::RotationPolicy;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Failure to append to a destination
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Destination is closed")]
    Closed,
}

/// Append-only destination for encoded records.
///
/// Implementations must be safe for unsynchronized concurrent use.
pub trait LogWriter: Send + Sync {
    /// Append one encoded record.
    fn append(&self, bytes: &[u8]) -> Result<(), WriteError>;

    /// Flush buffered bytes, if any.
    fn flush(&self) -> Result<(), WriteError> {
        Ok(())
    }

    /// Drain pending writes and release the destination.
    ///
    /// Appends after `close` may fail with [`WriteError::Closed`].
    fn close(&self) {}
}

/// Builds the destinations the pipeline binds sinks to.
pub trait DestinationFactory: Send + Sync {
    /// Standard output
    fn stdout(&self) -> Arc<dyn LogWriter>;

    /// A file destination that rolls over according to `policy`.
    ///
    /// Opening is lazy: a destination that cannot be created reports the
    /// failure on append rather than here.
    fn rotating_file(&self, policy: &RotationPolicy) -> Arc<dyn LogWriter>;

    /// Where sink write failures are reported (typically standard error)
    fn error_output(&self) -> Arc<dyn LogWriter>;
}

/// In-memory destination, for tests and for capturing output.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything appended so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.contents().contains(text)
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().map(|buf| buf.is_empty()).unwrap_or(true)
    }

    pub fn clear(&self) {
        if let Ok(mut buf) = self.buffer.lock() {
            buf.clear();
        }
    }
}

impl LogWriter for MemoryWriter {
    fn append(&self, bytes: &[u8]) -> Result<(), WriteError> {
        let mut buf = self
            .buffer
            .lock()
            .map_err(|_| std::io::Error::other("memory writer poisoned"))?;
        buf.extend_from_slice(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_writer_appends() {
        let writer = MemoryWriter::new();
        assert!(writer.is_empty());

        writer.append(b"first\n").unwrap();
        writer.append(b"second\n").unwrap();

        assert_eq!(writer.lines(), vec!["first", "second"]);
        assert!(writer.contains("second"));
    }

    #[test]
    fn test_memory_writer_clones_share_buffer() {
        let writer = MemoryWriter::new();
        let clone = writer.clone();
        clone.append(b"shared").unwrap();
        assert_eq!(writer.contents(), "shared");

        writer.clear();
        assert!(clone.is_empty());
    }
}
