//! Error types for the report pipelines.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading input documents and writing reports.
#[derive(Error, Debug)]
pub enum ScribeError {
    /// The input file does not exist
    #[error("{} not found!", path.display())]
    NotFound { path: PathBuf },
    /// The input file is not well-formed JSON or does not match the expected
    /// shape (including malformed dates)
    #[error("Error parsing JSON in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Any other file system failure while reading or writing
    #[error("File system error at path '{}': {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScribeError {
    /// Classifies an I/O error raised while reading `path`.
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::FileSystem { path, source }
        }
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ScribeError>;
