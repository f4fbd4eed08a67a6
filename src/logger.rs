//! Channel logger with ordered handler fan-out.
//!
//! `log` builds one `LogRecord` and hands it to every registered handler in
//! registration order. A failing handler never stops the remaining ones; all
//! failures come back together as a `DispatchError`.
//!
//! The handler list sits behind a read/write lock: dispatch holds the read
//! side for the whole fan-out, `push_handler`/`pop_handler` take the write
//! side. Concurrent `log` calls therefore run in parallel, while registration
//! waits for in-flight dispatches to finish. Dispatch takes the read side
//! recursively, so a handler may log into the logger that is calling it
//! even while a registration is queued.

use crate::clock::{Clock, SystemClock};
use crate::domain::{DispatchError, Level, LogRecord};
use crate::handler::Handler;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct Logger {
    channel: String,
    handlers: RwLock<Vec<Arc<dyn Handler>>>,
    clock: Arc<dyn Clock>,
}

impl Logger {
    pub fn new(channel: impl Into<String>) -> Self {
        Self::with_clock(channel, Arc::new(SystemClock))
    }

    pub fn with_clock(channel: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            channel: channel.into(),
            handlers: RwLock::new(Vec::new()),
            clock,
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// A new logger on another channel that shares this one's handlers and
    /// clock. Later registrations on either logger are not mirrored.
    pub fn with_channel(&self, channel: impl Into<String>) -> Logger {
        Logger {
            channel: channel.into(),
            handlers: RwLock::new(self.handlers.read_recursive().clone()),
            clock: Arc::clone(&self.clock),
        }
    }

    /// Append a handler. Duplicates are allowed and each copy sees every record.
    pub fn push_handler(&self, handler: Arc<dyn Handler>) -> &Self {
        let mut handlers = self.handlers.write();
        handlers.push(handler);
        debug!(
            channel = %self.channel,
            handlers = handlers.len(),
            "Handler registered"
        );
        self
    }

    /// Remove the most recently pushed handler.
    pub fn pop_handler(&self) -> Option<Arc<dyn Handler>> {
        let popped = self.handlers.write().pop();
        if popped.is_some() {
            debug!(channel = %self.channel, "Handler removed");
        }
        popped
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read_recursive().len()
    }

    /// Whether at least one registered handler would admit a record at `level`.
    pub fn is_handling(&self, level: Level) -> bool {
        let record = LogRecord::with_timestamp(self.channel.as_str(), level, "", self.clock.now());
        self.handlers
            .read_recursive()
            .iter()
            .any(|h| h.is_handling(&record))
    }

    pub fn log(&self, level: Level, message: impl Into<String>) -> Result<(), DispatchError> {
        let record =
            LogRecord::with_timestamp(self.channel.as_str(), level, message, self.clock.now());

        let handlers = self.handlers.read_recursive();
        let mut failures = Vec::new();

        for (index, handler) in (1..).zip(handlers.iter()) {
            if let Err(e) = handler.emit(&record) {
                warn!(
                    channel = %self.channel,
                    level = %level,
                    handler_index = index,
                    error = %e,
                    "Log handler failed"
                );
                failures.push((index, e));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::PartialFailure(failures))
        }
    }

    pub fn debug(&self, message: impl Into<String>) -> Result<(), DispatchError> {
        self.log(Level::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Result<(), DispatchError> {
        self.log(Level::Info, message)
    }

    pub fn notice(&self, message: impl Into<String>) -> Result<(), DispatchError> {
        self.log(Level::Notice, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> Result<(), DispatchError> {
        self.log(Level::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Result<(), DispatchError> {
        self.log(Level::Error, message)
    }

    pub fn critical(&self, message: impl Into<String>) -> Result<(), DispatchError> {
        self.log(Level::Critical, message)
    }

    pub fn alert(&self, message: impl Into<String>) -> Result<(), DispatchError> {
        self.log(Level::Alert, message)
    }

    pub fn emergency(&self, message: impl Into<String>) -> Result<(), DispatchError> {
        self.log(Level::Emergency, message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("channel", &self.channel)
            .field("handlers", &self.handler_count())
            .finish_non_exhaustive()
    }
}
