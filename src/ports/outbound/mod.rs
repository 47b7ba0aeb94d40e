/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, logging, console).
pub mod diagnostic_logger;
pub mod formatter;
pub mod output_presenter;
pub mod text_source;

pub use diagnostic_logger::DiagnosticLogger;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use text_source::{SourceError, TextSource};
