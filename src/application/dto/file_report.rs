use crate::reading::domain::ReadOutcome;
use crate::shared::error::ReadError;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Found,
    NotFound,
    Error,
}

/// FileReport - Result of reading one requested path, ready for formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// The path exactly as the caller supplied it
    pub path: String,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Single-line description of a surfaced failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn from_result(path: &Path, result: Result<ReadOutcome, &ReadError>) -> Self {
        let path = path.display().to_string();
        match result {
            Ok(ReadOutcome::Content(content)) => Self {
                path,
                status: ReportStatus::Found,
                content: Some(content),
                error: None,
            },
            Ok(ReadOutcome::NotFound) => Self {
                path,
                status: ReportStatus::NotFound,
                content: None,
                error: None,
            },
            Err(err) => Self {
                path,
                status: ReportStatus::Error,
                content: None,
                // Display output carries a multi-line hint; keep the headline only.
                error: err.to_string().lines().next().map(str::to_string),
            },
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == ReportStatus::Found
    }
}
