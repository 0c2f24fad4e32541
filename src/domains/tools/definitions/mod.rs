//! Tool definitions module.
//!
//! Each tool lives in its own file and exposes a `definition()` built with
//! [`define_tool`](super::define_tool).

pub mod collections;

pub use collections::{
    CollectionMeta, CollectionName, CreateCollectionInput, CreateCollectionTool,
    DeleteCollectionInput, DeleteCollectionTool, ReadCollectionInput, ReadCollectionTool,
    ReadCollectionsInput, ReadCollectionsTool, UpdateCollectionInput, UpdateCollectionTool,
};

use super::definition::ToolDefinition;

/// Every tool the server exposes, in advertised order.
pub fn all_tools() -> Vec<ToolDefinition> {
    vec![
        CreateCollectionTool::definition(),
        UpdateCollectionTool::definition(),
        ReadCollectionsTool::definition(),
        ReadCollectionTool::definition(),
        DeleteCollectionTool::definition(),
    ]
}
