//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output. rmcp owns message
//! framing and dispatch to the MCP server handler.

mod config;
mod error;
mod service;

pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
