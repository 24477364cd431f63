//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! the documentation domain and the transport layer.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the documentation domain.
    #[error("Documentation error: {0}")]
    Docs(#[from] crate::domains::docs::DocsError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
