use crate::reading::domain::ReadOutcome;
use crate::shared::error::ReadError;
use std::path::Path;

/// ReadTextPort - Inbound port for the best-effort text read
///
/// A missing file is an ordinary outcome (`Ok(ReadOutcome::NotFound)`),
/// never an error. What happens to other failures depends on the
/// implementation's `ReadErrorPolicy`.
pub trait ReadTextPort {
    /// Reads the whole file at `path` as UTF-8 text
    ///
    /// # Errors
    /// Returns a `ReadError` for failures other than "file does not exist"
    /// when the implementation surfaces them.
    fn read_text(&self, path: &Path) -> Result<ReadOutcome, ReadError>;
}
