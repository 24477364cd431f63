//! MakeMCP Server Library
//!
//! A Model Context Protocol (MCP) server that hands out a bundled guide on
//! building MCP servers. The guide (`docs.md`, next to the executable) is
//! reachable two ways:
//!
//! - the `makemcp://docs` resource
//! - the `how_to_make_mcp` tool
//!
//! Both read the file fresh on every request.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: the documentation source plus the resources and tools built on it
//!
//! # Example
//!
//! ```rust,no_run
//! use make_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
