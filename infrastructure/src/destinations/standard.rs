//! Production destination factory

use super::background::BackgroundWriter;
use super::console::StderrWriter;
use super::reporting::ReportingWriter;
use super::rotating::RotatingFile;
use logweave_application::{DestinationFactory, LogWriter, SinkTarget};
use logweave_domain::RotationPolicy;
use std::io;
use std::sync::Arc;
use tracing::debug;

/// Standard output and rotating files, each behind its own writer thread.
///
/// Write failures on the worker threads are reported to the error output
/// (standard error unless overridden).
#[derive(Clone)]
pub struct StandardDestinations {
    error_output: Arc<dyn LogWriter>,
}

impl StandardDestinations {
    pub fn new() -> Self {
        Self::with_error_output(Arc::new(StderrWriter))
    }

    pub fn with_error_output(error_output: Arc<dyn LogWriter>) -> Self {
        Self { error_output }
    }
}

impl Default for StandardDestinations {
    fn default() -> Self {
        Self::new()
    }
}

impl DestinationFactory for StandardDestinations {
    fn stdout(&self) -> Arc<dyn LogWriter> {
        let stdout = ReportingWriter::new(
            io::stdout(),
            SinkTarget::Console,
            self.error_output.clone(),
        );
        Arc::new(BackgroundWriter::spawn(stdout, "logweave-stdout"))
    }

    fn rotating_file(&self, policy: &RotationPolicy) -> Arc<dyn LogWriter> {
        debug!(
            "Binding rotating file {} (max {} MB, {} days, {} backups)",
            policy.path.display(),
            policy.max_size_mb,
            policy.max_age_days,
            policy.max_backups
        );
        let file = ReportingWriter::new(
            RotatingFile::new(policy),
            SinkTarget::File(policy.path.clone()),
            self.error_output.clone(),
        );
        Arc::new(BackgroundWriter::spawn(file, "logweave-file"))
    }

    fn error_output(&self) -> Arc<dyn LogWriter> {
        self.error_output.clone()
    }
}
