//! Failure reporting for writers driven off the caller's thread.

use logweave_application::{LogWriter, SinkFailure, SinkTarget};
use std::io::{self, Write};
use std::sync::Arc;

/// Reports every failed write of `inner` to an error output.
///
/// A background worker has no caller to return an error to, so failures
/// are turned into one report line each and the write is considered done.
pub struct ReportingWriter<W> {
    inner: W,
    target: SinkTarget,
    errors: Arc<dyn LogWriter>,
}

impl<W: Write> ReportingWriter<W> {
    pub fn new(inner: W, target: SinkTarget, errors: Arc<dyn LogWriter>) -> Self {
        Self {
            inner,
            target,
            errors,
        }
    }

    fn report(&self, error: io::Error) {
        SinkFailure::new(self.target.clone(), error).report(self.errors.as_ref());
    }
}

impl<W: Write> Write for ReportingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Err(e) = self.inner.write_all(buf) {
            self.report(e);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Err(e) = self.inner.flush() {
            self.report(e);
        }
        Ok(())
    }
}
