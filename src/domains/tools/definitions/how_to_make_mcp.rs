//! "How to make an MCP server" tool definition.
//!
//! Returns the same documentation as the `makemcp://docs` resource, for
//! clients that discover content through tools rather than resources.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::docs::DocumentSource;

// ============================================================================
// Tool Parameters
// ============================================================================

/// The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct HowToMakeMcpParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// Hands out the MCP server-building guide.
pub struct HowToMakeMcpTool;

impl HowToMakeMcpTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "how_to_make_mcp";

    /// Tool description shown to clients. Agents read this to decide when to call the tool.
    pub const DESCRIPTION: &'static str = "This tool returns instructions on how to build MCP servers.

You should use this tool if the user asks you to make an MCP server,
but did not provide general information on MCP servers. The instructions
include an example server and a quick overview of MCP terms like tools,
resources, and prompts.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(_params: &HowToMakeMcpParams, docs: &dyn DocumentSource) -> CallToolResult {
        info!("How-to-make-MCP tool called");

        match docs.read() {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                warn!("Failed to read documentation from {}: {}", docs.location(), e);
                CallToolResult::error(vec![Content::text(format!(
                    "Failed to read documentation: {}",
                    e
                ))])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<HowToMakeMcpParams>(),
            annotations: Some(ToolAnnotations {
                title: None,
                read_only_hint: Some(true),
                destructive_hint: Some(false),
                idempotent_hint: Some(true),
                open_world_hint: Some(false),
            }),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(docs: Arc<dyn DocumentSource>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let docs = docs.clone();
            async move {
                let params: HowToMakeMcpParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, docs.as_ref()))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
