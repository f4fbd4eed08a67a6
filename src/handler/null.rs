use super::Handler;
use crate::domain::{HandlerError, Level, LogRecord};

/// Admits records at or above `min_level` and discards them.
#[derive(Debug, Clone, Copy)]
pub struct NullHandler {
    min_level: Level,
}

impl NullHandler {
    pub fn new(min_level: Level) -> Self {
        Self { min_level }
    }
}

impl Default for NullHandler {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl Handler for NullHandler {
    fn min_level(&self) -> Level {
        self.min_level
    }

    fn emit(&self, _record: &LogRecord) -> Result<(), HandlerError> {
        Ok(())
    }
}
