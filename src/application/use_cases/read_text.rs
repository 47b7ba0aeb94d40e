use crate::ports::inbound::ReadTextPort;
use crate::ports::outbound::{DiagnosticLogger, SourceError, TextSource};
use crate::reading::domain::{ReadErrorPolicy, ReadOutcome};
use crate::shared::error::ReadError;
use std::path::Path;

/// ReadTextUseCase - Best-effort read of a UTF-8 text file
///
/// Orchestrates a `TextSource` (where the bytes come from) and a
/// `DiagnosticLogger` (where the not-found diagnostic goes).
///
/// # Type Parameters
/// * `S` - TextSource implementation
/// * `L` - DiagnosticLogger implementation
///
/// # Behavior
/// - Found: returns `ReadOutcome::Content` with the bytes decoded as UTF-8,
///   unchanged. Nothing is logged.
/// - Not found: logs `The file <path> was not found.` once at error
///   severity and returns `ReadOutcome::NotFound`.
/// - Anything else: handled according to the configured `ReadErrorPolicy`.
pub struct ReadTextUseCase<S, L> {
    source: S,
    logger: L,
    policy: ReadErrorPolicy,
}

impl<S, L> ReadTextUseCase<S, L>
where
    S: TextSource,
    L: DiagnosticLogger,
{
    /// Creates a use case that surfaces non-not-found failures
    pub fn new(source: S, logger: L) -> Self {
        Self {
            source,
            logger,
            policy: ReadErrorPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ReadErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ReadErrorPolicy {
        self.policy
    }

    fn not_found(&self, path: &Path) -> ReadOutcome {
        self.logger
            .error(&format!("The file {} was not found.", path.display()));
        ReadOutcome::NotFound
    }

    fn handle_failure(&self, error: ReadError) -> Result<ReadOutcome, ReadError> {
        match self.policy {
            ReadErrorPolicy::Surface => Err(error),
            ReadErrorPolicy::Absent => {
                let cause = match &error {
                    ReadError::Io { source, .. } => source.to_string(),
                    ReadError::Decode { source, .. } => source.to_string(),
                    ReadError::TooLarge { size, limit, .. } => {
                        format!("file is {} bytes, limit is {} bytes", size, limit)
                    }
                };
                self.logger.error(&format!(
                    "The file {} could not be read: {}",
                    error.path().display(),
                    cause
                ));
                Ok(ReadOutcome::NotFound)
            }
        }
    }
}

impl<S, L> ReadTextPort for ReadTextUseCase<S, L>
where
    S: TextSource,
    L: DiagnosticLogger,
{
    fn read_text(&self, path: &Path) -> Result<ReadOutcome, ReadError> {
        let bytes = match self.source.read_bytes(path) {
            Ok(bytes) => bytes,
            Err(SourceError::NotFound) => return Ok(self.not_found(path)),
            Err(SourceError::TooLarge { size, limit }) => {
                return self.handle_failure(ReadError::TooLarge {
                    path: path.to_path_buf(),
                    size,
                    limit,
                })
            }
            Err(SourceError::Io(source)) => {
                return self.handle_failure(ReadError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        match String::from_utf8(bytes) {
            Ok(text) => Ok(ReadOutcome::Content(text)),
            Err(source) => self.handle_failure(ReadError::Decode {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;

    struct StubSource(fn() -> Result<Vec<u8>, SourceError>);

    impl TextSource for StubSource {
        fn read_bytes(&self, _path: &Path) -> Result<Vec<u8>, SourceError> {
            (self.0)()
        }
    }

    #[derive(Default)]
    struct VecLogger(RefCell<Vec<String>>);

    impl DiagnosticLogger for VecLogger {
        fn error(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_content_is_returned_verbatim() {
        let logger = VecLogger::default();
        let use_case = ReadTextUseCase::new(
            StubSource(|| Ok(b"# Title\r\nBody text\n".to_vec())),
            &logger,
        );

        let outcome = use_case.read_text(Path::new("notes.md")).unwrap();

        assert_eq!(outcome, ReadOutcome::Content("# Title\r\nBody text\n".to_string()));
        assert!(logger.0.borrow().is_empty());
    }

    #[test]
    fn test_not_found_logs_once_with_path() {
        let logger = VecLogger::default();
        let use_case = ReadTextUseCase::new(StubSource(|| Err(SourceError::NotFound)), &logger);

        let outcome = use_case.read_text(Path::new("missing.md")).unwrap();

        assert_eq!(outcome, ReadOutcome::NotFound);
        assert_eq!(
            *logger.0.borrow(),
            vec!["The file missing.md was not found.".to_string()]
        );
    }

    #[test]
    fn test_io_error_surfaces_by_default() {
        let logger = VecLogger::default();
        let use_case = ReadTextUseCase::new(
            StubSource(|| {
                Err(SourceError::Io(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "denied",
                )))
            }),
            &logger,
        );

        let err = use_case.read_text(Path::new("locked.md")).unwrap_err();

        assert!(matches!(err, ReadError::Io { .. }));
        assert_eq!(err.path(), Path::new("locked.md"));
        assert!(logger.0.borrow().is_empty());
    }

    #[test]
    fn test_decode_error_surfaces_by_default() {
        let logger = VecLogger::default();
        let use_case = ReadTextUseCase::new(StubSource(|| Ok(vec![0x23, 0xff, 0x0a])), &logger);

        let err = use_case.read_text(Path::new("latin1.md")).unwrap_err();

        assert!(matches!(err, ReadError::Decode { .. }));
    }

    #[test]
    fn test_absent_policy_folds_failures_and_logs() {
        let logger = VecLogger::default();
        let use_case = ReadTextUseCase::new(
            StubSource(|| Err(SourceError::TooLarge { size: 10, limit: 4 })),
            &logger,
        )
        .with_policy(ReadErrorPolicy::Absent);

        let outcome = use_case.read_text(Path::new("big.md")).unwrap();

        assert_eq!(outcome, ReadOutcome::NotFound);
        let messages = logger.0.borrow();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0],
            "The file big.md could not be read: file is 10 bytes, limit is 4 bytes"
        );
    }

    #[test]
    fn test_policy_accessor() {
        let logger = VecLogger::default();
        let use_case = ReadTextUseCase::new(StubSource(|| Ok(Vec::new())), &logger);
        assert_eq!(use_case.policy(), ReadErrorPolicy::Surface);

        let use_case = use_case.with_policy(ReadErrorPolicy::Absent);
        assert_eq!(use_case.policy(), ReadErrorPolicy::Absent);
    }
}
