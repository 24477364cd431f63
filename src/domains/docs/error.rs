//! Documentation-specific error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or reading the documentation file.
#[derive(Debug, Error)]
pub enum DocsError {
    /// The documentation file does not exist.
    #[error("Documentation file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The documentation file exists but could not be read.
    #[error("Failed to read documentation file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory holding the documentation file could not be determined.
    #[error("Cannot resolve documentation directory: {0}")]
    Unresolved(String),
}

impl DocsError {
    /// Classify an I/O failure for the file at `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Unreadable { path, source },
        }
    }

    /// Create a new "unresolved" error.
    pub fn unresolved(msg: impl Into<String>) -> Self {
        Self::Unresolved(msg.into())
    }

    /// Whether this error means the file is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
