/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod file_report;
mod output_format;

pub use file_report::{FileReport, ReportStatus};
pub use output_format::OutputFormat;
