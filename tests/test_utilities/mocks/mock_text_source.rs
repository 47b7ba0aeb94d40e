use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use text_reader::prelude::*;

enum Entry {
    Bytes(Vec<u8>),
    Fail(io::ErrorKind),
}

/// Mock TextSource serving canned bytes or failures per path
#[derive(Default)]
pub struct MockTextSource {
    entries: HashMap<PathBuf, Entry>,
    reads: AtomicUsize,
}

impl MockTextSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.entries
            .insert(PathBuf::from(path), Entry::Bytes(content.into()));
        self
    }

    pub fn with_failure(mut self, path: &str, kind: io::ErrorKind) -> Self {
        self.entries.insert(PathBuf::from(path), Entry::Fail(kind));
        self
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl TextSource for MockTextSource {
    fn read_bytes(&self, path: &Path) -> std::result::Result<Vec<u8>, SourceError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match self.entries.get(path) {
            Some(Entry::Bytes(bytes)) => Ok(bytes.clone()),
            Some(Entry::Fail(kind)) => Err(io::Error::new(*kind, "mock failure").into()),
            None => Err(SourceError::NotFound),
        }
    }
}

/// TextSource that checks the file exists, deletes it, then opens it.
///
/// Reproduces a file disappearing between an existence check and the open.
pub struct VanishingTextSource {
    inner: FileSystemReader,
}

impl VanishingTextSource {
    pub fn new() -> Self {
        Self {
            inner: FileSystemReader::new(),
        }
    }
}

impl TextSource for VanishingTextSource {
    fn read_bytes(&self, path: &Path) -> std::result::Result<Vec<u8>, SourceError> {
        assert!(path.exists(), "fixture must exist before the race");
        fs::remove_file(path).unwrap();
        self.inner.read_bytes(path)
    }
}
