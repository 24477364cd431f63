//! Resource-specific error types.

use thiserror::Error;

use crate::domains::docs::DocsError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource is registered under the requested URI.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The backing documentation could not be read.
    #[error(transparent)]
    Docs(#[from] DocsError),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }
}
