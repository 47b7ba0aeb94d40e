use std::sync::{Arc, Mutex};
use text_reader::prelude::*;

/// Mock DiagnosticLogger for testing that captures messages
#[derive(Default, Clone)]
pub struct MockDiagnosticLogger {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockDiagnosticLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl DiagnosticLogger for MockDiagnosticLogger {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
