pub mod memory;
pub mod null;
pub mod stream;

use crate::domain::{HandlerError, Level, LogRecord};

pub use memory::MemoryHandler;
pub use null::NullHandler;
pub use stream::StreamHandler;

/// A sink that turns admitted records into an external effect.
///
/// Implementations filter on their own `min_level`; a skipped record is
/// `Ok(())` with no side effect. Errors are returned to the logger, which
/// keeps dispatching to the remaining handlers.
///
/// The trait is dyn-compatible so loggers can hold `Arc<dyn Handler>` and
/// share one handler between several loggers.
#[cfg_attr(test, mockall::automock)]
pub trait Handler: Send + Sync {
    fn min_level(&self) -> Level;

    fn is_handling(&self, record: &LogRecord) -> bool {
        record.level().meets_threshold(self.min_level())
    }

    fn emit(&self, record: &LogRecord) -> Result<(), HandlerError>;
}
