//! Tools domain module.
//!
//! Tools are functions that MCP clients call by name. Each tool lives in its
//! own file under `definitions/` and knows how to build its own route.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Builds the rmcp ToolRouter from the definitions
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, `execute()`, `to_tool()` and `create_route()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add the route in `router.rs` using `with_route()`

pub mod definitions;
pub mod router;

pub use router::{build_tool_router, tool_names};
