//! Tool definitions module.
//!
//! Each tool is defined in its own file.

mod how_to_make_mcp;

pub use how_to_make_mcp::{HowToMakeMcpParams, HowToMakeMcpTool};
