//! MCP Server implementation and lifecycle management.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool builds a `ToolDefinition` through the shared `define_tool`
//! factory, pairing its input contract with an async handler.
//!
//! The rmcp `ToolRouter` and the HTTP dispatch both come from the same
//! `ToolRegistry`, so adding a tool never touches this file.

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;

use super::client::{DirectusClient, SharedClient};
use super::config::Config;
use super::error::Error;
use crate::domains::tools::{ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "This server manages collections of a Directus instance. \
     Use create-collection to add a collection (schema null creates a folder), \
     update-collection to change collection meta, and the read/delete tools to inspect or remove collections.";

/// The main MCP server handler.
///
/// Implements rmcp's `ServerHandler`; tool calls are routed through the
/// dynamically built `ToolRouter`.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry used for listing and HTTP dispatch.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server using the given Directus client.
    pub fn new(config: Config, client: SharedClient) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::new(client.clone())),
            tool_router: build_tool_router::<Self>(client),
        }
    }

    /// Create a server with a Directus client built from configuration.
    pub fn from_config(config: Config) -> super::error::Result<Self> {
        if config.directus.url.trim().is_empty() {
            return Err(Error::config("DIRECTUS_URL must not be empty"));
        }
        let client = DirectusClient::from_config(&config.directus)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Usage instructions reported to clients.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
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

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
