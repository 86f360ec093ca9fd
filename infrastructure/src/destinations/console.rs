//! Standard error writer

use logweave_application::{LogWriter, WriteError};
use std::io::{self, Write};

/// Synchronous standard error; used for failure reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrWriter;

impl LogWriter for StderrWriter {
    fn append(&self, bytes: &[u8]) -> Result<(), WriteError> {
        io::stderr().lock().write_all(bytes)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), WriteError> {
        io::stderr().lock().flush()?;
        Ok(())
    }
}
