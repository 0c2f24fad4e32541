//! Update-collection tool definition.
//!
//! Only the `meta` object of an existing collection can be changed through
//! this tool. Renaming is not supported.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use super::contract::CollectionName;
use crate::core::client::{CollectionUpdate, SharedClient, update_collection};
use crate::domains::tools::definition::{ToolDefinition, define_tool};
use crate::domains::tools::response::{ToolResponse, format_error, format_success};

/// Parameters for the update-collection tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCollectionInput {
    /// Unique identifier of the collection.
    pub collection: CollectionName,

    /// Metadata of the collection.
    pub meta: Map<String, Value>,
}

/// Update-collection tool.
pub struct UpdateCollectionTool;

impl UpdateCollectionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update-collection";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update the metadata for an existing collection. \
         Only the 'meta' values of the collection object can be updated. \
         Updating the collection name is not supported at this time.";

    pub fn definition() -> ToolDefinition {
        define_tool(Self::NAME, Self::DESCRIPTION, Self::execute)
    }

    #[instrument(skip_all, fields(collection = %input.collection))]
    pub async fn execute(client: SharedClient, input: UpdateCollectionInput) -> ToolResponse {
        let UpdateCollectionInput { collection, meta } = input;
        info!("Updating meta of collection '{}'", collection);

        let command = update_collection(collection.as_str(), &CollectionUpdate { meta });
        match client.request(command).await {
            Ok(result) => format_success(result),
            Err(e) => {
                warn!("Failed to update collection '{}': {}", collection, e);
                format_error(e)
            }
        }
    }
}
