//! text-reader - best-effort UTF-8 text file reader
//!
//! Reads a whole text file and returns its content verbatim, or an explicit
//! absence value when no file exists at the path. The not-found case is
//! never an error: it is reported once, at error severity, through an
//! injected logger.
//!
//! # Architecture
//!
//! - **Domain Layer** (`reading`): `ReadOutcome` and `ReadErrorPolicy`
//! - **Application Layer** (`application`): the `ReadTextUseCase` and DTOs
//! - **Ports** (`ports`): interfaces for the file source, logger and output
//! - **Adapters** (`adapters`): file system, tracing, formatters, stdout
//! - **Shared** (`shared`): error types and the `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use text_reader::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> std::result::Result<(), ReadError> {
//! let reader = ReadTextUseCase::new(FileSystemReader::new(), TracingLogger::new());
//!
//! match reader.read_text(Path::new("notes.md"))? {
//!     ReadOutcome::Content(text) => print!("{}", text),
//!     ReadOutcome::NotFound => eprintln!("no notes yet"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod reading;
pub mod shared;

use std::path::Path;

/// Reads `path` with the default file system source and tracing logger.
///
/// Returns `Ok(ReadOutcome::NotFound)` (after logging
/// `The file <path> was not found.`) when the file is missing; other
/// failures are returned as [`ReadError`](shared::error::ReadError).
pub fn read_text(
    path: impl AsRef<Path>,
) -> std::result::Result<reading::domain::ReadOutcome, shared::error::ReadError> {
    use ports::inbound::ReadTextPort;

    application::use_cases::ReadTextUseCase::new(
        adapters::outbound::filesystem::FileSystemReader::new(),
        adapters::outbound::logging::TracingLogger::new(),
    )
    .read_text(path.as_ref())
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StdoutPresenter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, MAX_FILE_SIZE};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, PlainTextFormatter};
    pub use crate::adapters::outbound::logging::TracingLogger;
    pub use crate::application::dto::{FileReport, OutputFormat, ReportStatus};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::ReadTextUseCase;
    pub use crate::ports::inbound::ReadTextPort;
    pub use crate::ports::outbound::{
        DiagnosticLogger, OutputPresenter, ReportFormatter, SourceError, TextSource,
    };
    pub use crate::reading::domain::{ReadErrorPolicy, ReadOutcome};
    pub use crate::shared::error::ReadError;
    pub use crate::shared::Result;
}
