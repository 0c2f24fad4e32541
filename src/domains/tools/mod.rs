//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call to administer the
//! collections of a Directus instance.
//!
//! ## Architecture
//!
//! - `definition.rs` - `define_tool` factory and the `ToolDefinition` it builds
//! - `response.rs` - Success/failure envelope shared by all handlers
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for the STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with an input struct and an async `execute`
//! 2. Expose `definition()` built with [`define_tool`]
//! 3. Add it to `definitions::all_tools()`
//!
//! The router and the registry both read `all_tools()`, so nothing else changes.

mod definition;
pub mod definitions;
mod error;
mod registry;
mod response;
pub mod router;

pub use definition::{ToolDefinition, ToolHandler, define_tool};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use response::{ToolResponse, format_error, format_success};
pub use router::build_tool_router;
