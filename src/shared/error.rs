use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a missing input file from
/// a genuine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested file was read
    Success = 0,
    /// At least one requested file was absent
    FileNotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (I/O error, decode error, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FileNotFound => write!(f, "File Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures of a text read that are not "the file does not exist".
///
/// A missing file is not an error: it is reported as
/// [`ReadOutcome::NotFound`](crate::reading::domain::ReadOutcome::NotFound).
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to read file: {path}\nDetails: {source}\n\n💡 Hint: Please verify that the path is a regular file and you have read permissions")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8 text: {path}\nDetails: {source}\n\n💡 Hint: Please convert the file to UTF-8")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("File is too large: {path} ({size} bytes)\nMaximum allowed size is {limit} bytes\n\n💡 Hint: Raise max_file_size in the config file or pass --max-file-size")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}

impl ReadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ReadError::Io { path, .. }
            | ReadError::Decode { path, .. }
            | ReadError::TooLarge { path, .. } => path,
        }
    }
}
