use crate::ports::outbound::DiagnosticLogger;

/// Component name attached to records when none is configured
pub const DEFAULT_COMPONENT: &str = "text_reader";

/// TracingLogger adapter forwarding diagnostics to `tracing`
///
/// Records go to whatever subscriber is installed for the process (or the
/// current thread's default), tagged with a `component` field so several
/// readers can share one sink and still be told apart.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: String,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self::with_component(DEFAULT_COMPONENT)
    }

    pub fn with_component(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticLogger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!(component = %self.component, "{}", message);
    }
}
