use crate::application::dto::FileReport;
use crate::shared::Result;

/// ReportFormatter port for rendering read results
///
/// This port abstracts how a batch of per-file reports is turned into
/// the text the CLI prints (raw contents, JSON, ...).
pub trait ReportFormatter {
    /// Formats the reports in the order they were produced
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}
