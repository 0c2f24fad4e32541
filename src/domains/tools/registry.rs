//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Name-based dispatch for the HTTP transport
//! - Tool metadata for listing

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::{debug, warn};

use super::definition::ToolDefinition;
use super::definitions::all_tools;
use super::error::ToolError;
use crate::core::client::SharedClient;

/// Tool registry - owns every tool definition and the client they share.
pub struct ToolRegistry {
    client: SharedClient,
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// Create a registry holding every known tool.
    pub fn new(client: SharedClient) -> Self {
        Self {
            client,
            tools: all_tools(),
        }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDefinition::to_tool).collect()
    }

    /// Look up a tool by name.
    pub fn find(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Dispatch a tool call by name.
    ///
    /// Returns the serialized `CallToolResult`. Remote failures come back as a
    /// result with `isError` set; only unknown tools and rejected arguments
    /// produce `Err`.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, String> {
        let Some(tool) = self.find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name).to_string());
        };

        debug!("Dispatching tool call: {}", name);
        let response = tool
            .invoke_value(self.client.clone(), arguments)
            .await
            .map_err(|e| e.to_string())?;

        serde_json::to_value(CallToolResult::from(response)).map_err(|e| e.to_string())
    }
}
