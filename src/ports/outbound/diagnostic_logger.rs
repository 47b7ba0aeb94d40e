/// DiagnosticLogger port for recording read diagnostics
///
/// The reader only ever needs to report at error severity, so this is
/// the whole surface. Adapters decide where the record ends up
/// (the process-wide tracing subscriber, a test recorder, ...).
pub trait DiagnosticLogger {
    /// Records an error-level diagnostic message
    ///
    /// # Arguments
    /// * `message` - Human readable message, already containing any path context
    fn error(&self, message: &str);
}

impl<T: DiagnosticLogger + ?Sized> DiagnosticLogger for &T {
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

impl<T: DiagnosticLogger + ?Sized> DiagnosticLogger for std::sync::Arc<T> {
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
