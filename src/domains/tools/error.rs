//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors raised before a tool handler runs.
///
/// Remote failures never show up here: handlers fold them into a failure
/// envelope.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The arguments do not satisfy the tool's input contract.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Convert into the MCP protocol error.
    pub fn to_mcp_error(&self) -> McpError {
        match self {
            Self::NotFound(_) => McpError::invalid_request(self.to_string(), None),
            Self::InvalidArguments(_) => McpError::invalid_params(self.to_string(), None),
        }
    }
}
