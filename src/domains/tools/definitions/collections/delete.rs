//! Delete-collection tool definition.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::contract::CollectionName;
use crate::core::client::{SharedClient, delete_collection};
use crate::domains::tools::definition::{ToolDefinition, define_tool};
use crate::domains::tools::response::{ToolResponse, format_error, format_success};

/// Parameters for the delete-collection tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeleteCollectionInput {
    /// Unique identifier of the collection.
    pub collection: CollectionName,
}

/// Delete-collection tool.
///
/// Removes the collection together with all of its fields and items.
pub struct DeleteCollectionTool;

impl DeleteCollectionTool {
    pub const NAME: &'static str = "delete-collection";

    pub const DESCRIPTION: &'static str = "Delete an existing collection. \
         WARNING: this permanently removes the collection and all of its items.";

    pub fn definition() -> ToolDefinition {
        define_tool(Self::NAME, Self::DESCRIPTION, Self::execute)
    }

    #[instrument(skip_all, fields(collection = %input.collection))]
    pub async fn execute(client: SharedClient, input: DeleteCollectionInput) -> ToolResponse {
        info!("Deleting collection '{}'", input.collection);
        match client.request(delete_collection(input.collection.as_str())).await {
            Ok(result) => format_success(result),
            Err(e) => {
                warn!("Failed to delete collection '{}': {}", input.collection, e);
                format_error(e)
            }
        }
    }
}
