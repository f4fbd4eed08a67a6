use super::Handler;
use crate::domain::{HandlerError, Level, LogRecord};
use parking_lot::RwLock;
use std::sync::Arc;

/// Keeps admitted records in memory. Clones share the same storage, so a test
/// can keep one clone and register the other.
#[derive(Debug, Clone)]
pub struct MemoryHandler {
    records: Arc<RwLock<Vec<LogRecord>>>,
    min_level: Level,
}

impl MemoryHandler {
    pub fn new(min_level: Level) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            min_level,
        }
    }

    /// Snapshot of the records admitted so far, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    pub fn has_record(&self, level: Level, message: &str) -> bool {
        self.records
            .read()
            .iter()
            .any(|r| r.level() == level && r.message() == message)
    }

    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl Handler for MemoryHandler {
    fn min_level(&self) -> Level {
        self.min_level
    }

    fn emit(&self, record: &LogRecord) -> Result<(), HandlerError> {
        if self.is_handling(record) {
            self.records.write().push(record.clone());
        }
        Ok(())
    }
}
