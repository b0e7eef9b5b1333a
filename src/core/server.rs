//! MCP server implementation and lifecycle management.
//!
//! The server owns one catalog service and one navigator for its whole
//! lifetime. Every transport connection shares them, so the usage counters
//! and the current location are process-wide.
//!
//! The ToolRouter is built in `domains/tools/router.rs`; adding a tool does
//! not touch this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::{
    catalog::{CatalogService, QueryService},
    navigation::Navigator,
    resources::{ResourceError, ResourceService},
    tools::{ToolContext, ToolError, ToolRegistry, build_tool_router},
};

const INSTRUCTIONS: &str = "Browse a catalog of small utility tools with `navigate` \
(paths like /, /category/1, /tool/15, /search?q=pdf) and run the interactive ones \
directly: age calculator, unit converter, password generator, JSON formatter, word \
counter, QR code generator and simulated PDF/image conversions. Catalog data is also \
readable as catalog:// resources.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct ToolboxServer {
    config: Arc<Config>,

    /// Resources backed by the catalog.
    resource_service: Arc<ResourceService>,

    /// JSON dispatch for the HTTP transport.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl ToolboxServer {
    /// Create a new server, loading the catalog named by the configuration.
    pub fn new(config: Config) -> CoreResult<Self> {
        let config = Arc::new(config);

        let catalog: Arc<dyn QueryService> =
            Arc::new(CatalogService::from_config(&config.catalog)?);
        info!("Catalog loaded");

        Ok(Self::with_catalog(config, catalog))
    }

    /// Create a server over an existing query service.
    pub fn with_catalog(config: Arc<Config>, catalog: Arc<dyn QueryService>) -> Self {
        let navigator = Arc::new(Navigator::new(catalog.clone()));
        let ctx = ToolContext::new(config.clone(), navigator);

        Self {
            resource_service: Arc::new(ResourceService::new(catalog)),
            registry: Arc::new(ToolRegistry::new(ctx.clone())),
            tool_router: build_tool_router::<Self>(ctx),
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

    /// Usage hints sent to clients on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name with JSON arguments.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        self.registry.call_tool(name, arguments).await
    }

    /// List all fixed resources.
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.raw.uri,
                    "name": r.raw.name,
                    "description": r.raw.description,
                    "mimeType": r.raw.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(
        &self,
        uri: &str,
    ) -> Result<serde_json::Value, ResourceError> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::json!({
            "contents": result.contents
        }))
    }

    /// List all resource templates.
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        let templates = self.resource_service.list_resource_templates().await;

        templates
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for ToolboxServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
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
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
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
            .map_err(|e| {
                if e.is_not_found() {
                    McpError::resource_not_found(e.to_string(), None)
                } else {
                    McpError::internal_error(e.to_string(), None)
                }
            })
    }
}
