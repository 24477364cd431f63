//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! The server is built once at startup and handed to the transport. Its
//! resource service and tool router share one [`DocumentSource`] but read
//! from it independently.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use crate::domains::{
    docs::{DocumentSource, FileDocsSource},
    resources::{ResourceError, ResourceService},
    tools::build_tool_router,
};

/// Instructions sent to clients during initialization.
const INSTRUCTIONS: &str = "This server provides documentation on how to build MCP servers. \
    Read the makemcp://docs resource or call the how_to_make_mcp tool to get it.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server serving the `docs.md` next to the executable.
    pub fn new(config: Config) -> super::Result<Self> {
        let docs = FileDocsSource::beside_executable()?;

        if docs.exists() {
            info!("Serving documentation from {}", docs.location());
        } else {
            warn!(
                "Documentation file {} does not exist yet; requests will fail until it does",
                docs.location()
            );
        }

        Ok(Self::with_docs_source(config, Arc::new(docs)))
    }

    /// Create a new MCP server reading documentation from the given source.
    pub fn with_docs_source(config: Config, docs: Arc<dyn DocumentSource>) -> Self {
        let config = Arc::new(config);

        Self {
            resource_service: Arc::new(ResourceService::new(docs.clone())),
            tool_router: build_tool_router::<Self>(docs),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List the metadata of all registered tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| match e {
                ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
                ResourceError::Docs(_) => McpError::internal_error(e.to_string(), None),
            })
    }
}
