/// Logging adapters backed by the process-wide tracing dispatcher
mod subscriber;
mod tracing_logger;

pub use subscriber::{init_logging, LogSettings, LOG_LEVELS};
pub use tracing_logger::{TracingLogger, DEFAULT_COMPONENT};
