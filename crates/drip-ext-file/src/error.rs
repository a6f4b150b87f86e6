//! Error types for file-based sources.

use std::path::Path;
use thiserror::Error;

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while reading or writing portfolio files.
#[derive(Error, Debug)]
pub enum FileError {
    /// The file could not be read or written.
    #[error("I/O error on {path}: {message}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// The file is not valid snapshot JSON.
    #[error("Invalid JSON in {path}: {message}")]
    Json {
        /// File path.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// The CSV input could not be parsed.
    #[error("CSV error: {0}")]
    Csv(String),
}

impl FileError {
    /// Create an I/O error for `path`.
    #[must_use]
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Create a JSON error for `path`.
    #[must_use]
    pub fn json(path: &Path, err: &serde_json::Error) -> Self {
        Self::Json {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for FileError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}
