use std::io;
use std::path::Path;
use thiserror::Error;

/// Why a [`TextSource`] could not hand back the bytes of a file.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Nothing exists at the path
    #[error("file not found")]
    NotFound,

    #[error("file is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            SourceError::NotFound
        } else {
            SourceError::Io(err)
        }
    }
}

/// TextSource port for fetching the raw bytes of a file
///
/// This port abstracts the storage the reader pulls from, so the
/// not-found and failure handling can be exercised without touching
/// the real file system.
pub trait TextSource {
    /// Reads every byte of the file at `path`
    ///
    /// # Errors
    /// - `SourceError::NotFound` if no file exists at `path` at open time
    /// - `SourceError::TooLarge` if the file exceeds the source's size limit
    /// - `SourceError::Io` for any other failure (permissions, directories, ...)
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, SourceError>;
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, SourceError> {
        (**self).read_bytes(path)
    }
}
