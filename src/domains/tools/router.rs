//! Tool Router - builds the rmcp ToolRouter from the tool definitions.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::HowToMakeMcpTool;
use crate::domains::docs::DocumentSource;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(docs: Arc<dyn DocumentSource>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(HowToMakeMcpTool::create_route(docs))
}

/// Get all tool names.
pub fn tool_names() -> Vec<&'static str> {
    vec![HowToMakeMcpTool::NAME]
}
