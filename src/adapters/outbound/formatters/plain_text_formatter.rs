use crate::application::dto::FileReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// PlainTextFormatter adapter that concatenates found contents verbatim
///
/// No separators are added and line endings are left alone, so a single
/// file round-trips byte for byte. Absent or failed files contribute nothing.
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for PlainTextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        Ok(reports
            .iter()
            .filter_map(|report| report.content.as_deref())
            .collect())
    }
}
