use crate::ports::outbound::{SourceError, TextSource};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default maximum file size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading files from the file system
///
/// Implements the TextSource port. Relative and absolute paths are both
/// accepted and resolved by the operating system; symbolic links are
/// followed.
#[derive(Debug, Clone)]
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for FileSystemReader {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, SourceError> {
        // No exists() pre-check: the open decides, so a file removed just
        // before this call is reported as NotFound rather than racing.
        let file = File::open(path)?;

        // Size is taken from the open handle, not the path.
        let size = file.metadata()?.len();
        if size > self.max_file_size {
            return Err(SourceError::TooLarge {
                size,
                limit: self.max_file_size,
            });
        }

        // The reported size may be sparse or stale, so it is not used to pre-allocate.
        let mut buf = Vec::new();
        // One byte past the limit is enough to detect a file that grew mid-read.
        file.take(self.max_file_size.saturating_add(1))
            .read_to_end(&mut buf)?;
        if buf.len() as u64 > self.max_file_size {
            return Err(SourceError::TooLarge {
                size: buf.len() as u64,
                limit: self.max_file_size,
            });
        }

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_bytes_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.md");
        fs::write(&path, "# Title\nBody text\n").unwrap();

        let bytes = FileSystemReader::new().read_bytes(&path).unwrap();

        assert_eq!(bytes, b"# Title\nBody text\n");
    }

    #[test]
    fn test_read_bytes_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.md");

        let result = FileSystemReader::new().read_bytes(&path);

        assert!(matches!(result, Err(SourceError::NotFound)));
    }

    #[test]
    fn test_read_bytes_missing_parent_directory_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("file.md");

        let result = FileSystemReader::new().read_bytes(&path);

        assert!(matches!(result, Err(SourceError::NotFound)));
    }

    #[test]
    fn test_read_bytes_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = FileSystemReader::new().read_bytes(temp_dir.path());

        assert!(matches!(result, Err(SourceError::Io(_))));
    }

    #[test]
    fn test_read_bytes_respects_size_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("big.md");
        fs::write(&path, "0123456789").unwrap();

        let reader = FileSystemReader::new().with_max_file_size(4);
        let result = reader.read_bytes(&path);

        match result {
            Err(SourceError::TooLarge { size, limit }) => {
                assert_eq!(size, 10);
                assert_eq!(limit, 4);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_read_bytes_at_exact_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edge.md");
        fs::write(&path, "1234").unwrap();

        let reader = FileSystemReader::new().with_max_file_size(4);

        assert_eq!(reader.read_bytes(&path).unwrap(), b"1234");
    }

    #[test]
    fn test_sparse_file_over_limit_is_rejected_without_reading() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sparse.md");
        let file = fs::File::create(&path).unwrap();
        file.set_len(1 << 40).unwrap();

        let reader = FileSystemReader::new().with_max_file_size(1024);

        match reader.read_bytes(&path) {
            Err(SourceError::TooLarge { size, limit }) => {
                assert_eq!(size, 1 << 40);
                assert_eq!(limit, 1024);
            }
            other => panic!("unexpected: {:?}", other.map(|b| b.len())),
        }
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(FileSystemReader::default().max_file_size(), MAX_FILE_SIZE);
        assert_eq!(MAX_FILE_SIZE, 100 * 1024 * 1024);
    }
}
