/// Mock implementations for testing
mod mock_diagnostic_logger;
mod mock_text_source;

pub use mock_diagnostic_logger::MockDiagnosticLogger;
pub use mock_text_source::{MockTextSource, VanishingTextSource};
