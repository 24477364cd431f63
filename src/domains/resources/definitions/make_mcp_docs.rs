//! "How to make an MCP server" documentation resource.

use super::ResourceDefinition;
use crate::domains::docs::{DocsError, DocumentSource};

/// The bundled MCP server-building guide, served as a resource.
pub struct MakeMcpDocsResource;

impl ResourceDefinition for MakeMcpDocsResource {
    const URI: &'static str = "makemcp://docs";
    const NAME: &'static str = "make_mcp";
    const DESCRIPTION: &'static str = "Documentation on how to make an MCP server.";
    const MIME_TYPE: &'static str = "text/plain";

    fn read(docs: &dyn DocumentSource) -> Result<String, DocsError> {
        docs.read()
    }
}
