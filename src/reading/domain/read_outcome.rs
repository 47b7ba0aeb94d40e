/// Result of reading a text file that may not exist.
///
/// `NotFound` is the absence marker: it is distinct from every possible
/// content value, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The full decoded text of the file, verbatim
    Content(String),
    /// No file exists at the requested path
    NotFound,
}

impl ReadOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, ReadOutcome::Content(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ReadOutcome::NotFound)
    }

    /// Borrows the content if the file was found
    pub fn content(&self) -> Option<&str> {
        match self {
            ReadOutcome::Content(text) => Some(text),
            ReadOutcome::NotFound => None,
        }
    }

    pub fn into_content(self) -> Option<String> {
        match self {
            ReadOutcome::Content(text) => Some(text),
            ReadOutcome::NotFound => None,
        }
    }
}

impl From<ReadOutcome> for Option<String> {
    fn from(outcome: ReadOutcome) -> Self {
        outcome.into_content()
    }
}
