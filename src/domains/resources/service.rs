//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It keeps the registry of available resources and answers read requests
//! by asking each entry's reader for fresh content.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::domains::docs::{DocsError, DocumentSource};

/// Produces the text of a resource from the documentation source.
pub type ResourceReader = fn(&dyn DocumentSource) -> Result<String, DocsError>;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Registry of available resources.
    /// Key: resource URI, Value: resource entry
    resources: HashMap<String, ResourceEntry>,

    /// Where resource content comes from.
    docs: Arc<dyn DocumentSource>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub reader: ResourceReader,
}

impl ResourceService {
    /// Create a new ResourceService reading from the given source.
    pub fn new(docs: Arc<dyn DocumentSource>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            resources: HashMap::new(),
            docs,
        };

        service.register_from_registry();

        service
    }

    /// Register all resources from the registry.
    fn register_from_registry(&mut self) {
        for entry in get_all_resources() {
            self.register_resource(entry);
        }
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    #[instrument(skip(self))]
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = (entry.reader)(self.docs.as_ref()).inspect_err(|e| {
            warn!("Failed to read resource {}: {}", uri, e);
        })?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text,
                meta: None,
            }],
        })
    }
}
