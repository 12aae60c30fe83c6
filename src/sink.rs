use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Destination for rendered log lines.
///
/// Implementations receive one complete, newline-terminated JSON document per
/// call and must write it as a single unit: two concurrent calls may never
/// interleave their bytes.
pub trait LogSink: Send + Sync {
    /// Write a single line to the underlying destination.
    ///
    /// **Returns**
    /// - `Ok(())` if the whole line was accepted.
    /// - `Err(..)` if the destination rejected or partially failed the
    ///   write. The handler reports this to its caller and drops the line.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;

    /// Flush any buffered output, if the destination buffers.
    ///
    /// Default implementation is a no-op.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Adapts any [`Write`] into a [`LogSink`] by serializing writes behind a
/// mutex.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.lock().write_all(line)
    }

    fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}

/// Writes lines to the process's standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(line)
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

/// Writes lines to the process's standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(line)
    }
}

/// Collects lines in memory. Clones share the same buffer.
///
/// Handy for capturing output in tests or for forwarding it elsewhere.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Written lines without their trailing newline.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buf
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.buf
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend_from_slice(line);
        Ok(())
    }
}
