//! Domain layer for rask-logger.
//!
//! Contains the canonical types shared across all modules:
//! - `Level`: Severity ordering (Debug < Info < ... < Emergency)
//! - `LogRecord`: One immutable log event
//! - `HandlerError` / `DispatchError`: Failure taxonomy of a dispatch

pub mod error;
pub mod level;
pub mod record;

pub use error::{DispatchError, HandlerError};
pub use level::{Level, LevelParseError};
pub use record::LogRecord;
