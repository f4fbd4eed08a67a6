#![warn(rust_2018_idioms)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
#![allow(
    clippy::missing_errors_doc,      // Error types are documented on the enums
    clippy::module_name_repetitions, // e.g. HandlerError in handler module
    clippy::must_use_candidate,
    clippy::doc_markdown
)]

pub mod app;
pub mod clock;
pub mod domain;
pub mod formatter;
pub mod handler;
pub mod logger;

// Re-export main types for easy access
pub use domain::{DispatchError, HandlerError, Level, LevelParseError, LogRecord};
pub use handler::{Handler, MemoryHandler, NullHandler, StreamHandler};
pub use logger::Logger;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
