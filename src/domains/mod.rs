//! Domains module containing business logic organized by bounded contexts.
//!
//! - **docs**: the bundled documentation file and how it is read
//! - **resources**: MCP resources clients read by URI
//! - **tools**: MCP tools clients call by name

pub mod docs;
pub mod resources;
pub mod tools;
