/// Filesystem adapters for file I/O operations
mod file_reader;

pub use file_reader::{FileSystemReader, MAX_FILE_SIZE};
