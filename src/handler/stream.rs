use super::Handler;
use crate::domain::{HandlerError, Level, LogRecord};
use crate::formatter::{Formatter, LineFormatter};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;

/// Writes formatted records to a caller-supplied sink.
///
/// The sink is opened by the caller (stdout, a file, a `Vec<u8>` in tests);
/// the handler never opens resources itself. Each admitted record costs one
/// `write_all` followed by a `flush`, so output stays ordered with whatever
/// else the process writes to the same target.
pub struct StreamHandler<W: Write + Send> {
    sink: Mutex<W>,
    min_level: Level,
    formatter: Box<dyn Formatter>,
}

impl<W: Write + Send> StreamHandler<W> {
    pub fn new(sink: W, min_level: Level) -> Self {
        Self {
            sink: Mutex::new(sink),
            min_level,
            formatter: Box::new(LineFormatter),
        }
    }

    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Give the sink back, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: Write + Send> Handler for StreamHandler<W> {
    fn min_level(&self) -> Level {
        self.min_level
    }

    fn emit(&self, record: &LogRecord) -> Result<(), HandlerError> {
        if !self.is_handling(record) {
            return Ok(());
        }

        let line = self.formatter.format(record)?;

        let mut sink = self.sink.lock();
        sink.write_all(line.as_bytes())
            .map_err(HandlerError::WriteFailed)?;
        sink.flush().map_err(HandlerError::WriteFailed)
    }
}

impl<W: Write + Send> fmt::Debug for StreamHandler<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamHandler")
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}
