//! Non-blocking destination backed by a worker thread.

use logweave_application::{LogWriter, WriteError};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};
use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};

/// Upper bound on how long `flush` waits for the worker
const FLUSH_TIMEOUT: Duration = Duration::from_secs(30);

/// Hands encoded records to a dedicated writer thread.
///
/// Appends only enqueue; the worker performs the actual I/O. `flush` blocks
/// until the worker has written every record enqueued before the call.
/// `close` drops the worker guard, which drains the queue before returning.
pub struct BackgroundWriter {
    writer: NonBlocking,
    guard: Mutex<Option<WorkerGuard>>,
    enqueued: AtomicU64,
    progress: Arc<Progress>,
}

impl BackgroundWriter {
    pub fn spawn<W>(inner: W, thread_name: &str) -> Self
    where
        W: Write + Send + 'static,
    {
        let progress = Arc::new(Progress::default());
        let tracked = Tracked {
            inner,
            progress: progress.clone(),
        };
        let (writer, guard) = NonBlockingBuilder::default()
            .lossy(false)
            .thread_name(thread_name)
            .finish(tracked);
        Self {
            writer,
            guard: Mutex::new(Some(guard)),
            enqueued: AtomicU64::new(0),
            progress,
        }
    }
}

/// Count of bytes the worker is done with.
#[derive(Default)]
struct Progress {
    written: Mutex<u64>,
    advanced: Condvar,
}

impl Progress {
    fn advance(&self, bytes: u64) {
        if bytes == 0 {
            return;
        }
        let mut written = match self.written.lock() {
            Ok(written) => written,
            Err(poisoned) => poisoned.into_inner(),
        };
        *written += bytes;
        self.advanced.notify_all();
    }

    fn wait_for(&self, target: u64, timeout: Duration) -> io::Result<()> {
        let deadline = Instant::now() + timeout;
        let mut written = self
            .written
            .lock()
            .map_err(|_| io::Error::other("background writer poisoned"))?;
        while *written < target {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    "background writer did not catch up",
                ));
            }
            written = self
                .advanced
                .wait_timeout(written, remaining)
                .map_err(|_| io::Error::other("background writer poisoned"))?
                .0;
        }
        Ok(())
    }
}

/// Worker-side wrapper that records progress after every write.
struct Tracked<W> {
    inner: W,
    progress: Arc<Progress>,
}

impl<W: Write> Write for Tracked<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.inner.write(buf);
        // A failed write abandons the rest of the record, so it counts as done
        let done = match &result {
            Ok(0) => buf.len(),
            Ok(n) => *n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => 0,
            Err(_) => buf.len(),
        };
        self.progress.advance(done as u64);
        result
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl LogWriter for BackgroundWriter {
    fn append(&self, bytes: &[u8]) -> Result<(), WriteError> {
        let guard = self
            .guard
            .lock()
            .map_err(|_| std::io::Error::other("background writer poisoned"))?;
        if guard.is_none() {
            return Err(WriteError::Closed);
        }
        let mut writer = self.writer.clone();
        writer.write_all(bytes)?;
        self.enqueued.fetch_add(bytes.len() as u64, Ordering::AcqRel);
        Ok(())
    }

    fn flush(&self) -> Result<(), WriteError> {
        let target = self.enqueued.load(Ordering::Acquire);
        self.progress.wait_for(target, FLUSH_TIMEOUT)?;
        Ok(())
    }

    fn close(&self) {
        let guard = match self.guard.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        drop(guard);
    }
}

impl Drop for BackgroundWriter {
    fn drop(&mut self) {
        self.close();
    }
}
