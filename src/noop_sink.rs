use crate::sink::LogSink;
use std::io;

/// A sink that simply drops every line.
///
/// Backs [`Logger::discard`](crate::logger::Logger::discard) and is useful
/// for measuring the cost of rendering without any I/O.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn write_line(&self, _line: &[u8]) -> io::Result<()> {
        Ok(())
    }
}
