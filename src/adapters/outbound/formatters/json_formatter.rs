use crate::application::dto::FileReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering reports as a pretty-printed JSON array
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = serde_json::to_string_pretty(reports)?;
        output.push('\n');
        Ok(output)
    }
}
