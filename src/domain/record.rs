use super::level::Level;
use crate::clock::{Clock, SystemClock};
use chrono::{DateTime, Utc};

/// One log event, built once per logging call and never mutated afterwards.
///
/// Fields are private so a record handed to several handlers is guaranteed
/// to look the same to each of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    timestamp: DateTime<Utc>,
    channel: String,
    level: Level,
    message: String,
}

impl LogRecord {
    /// Build a record stamped with the system clock.
    pub fn new(channel: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self::with_timestamp(channel, level, message, SystemClock.now())
    }

    pub fn with_timestamp(
        channel: impl Into<String>,
        level: Level,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            channel: channel.into(),
            level,
            message: message.into(),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
