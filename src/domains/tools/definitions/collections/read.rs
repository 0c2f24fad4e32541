//! Read-collections and read-collection tool definitions.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::contract::CollectionName;
use crate::core::client::{SharedClient, read_collection, read_collections};
use crate::domains::tools::definition::{ToolDefinition, define_tool};
use crate::domains::tools::response::{ToolResponse, format_error, format_success};

/// The list tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ReadCollectionsInput {}

/// Parameters for the read-collection tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ReadCollectionInput {
    /// Unique identifier of the collection.
    pub collection: CollectionName,
}

/// Read-collections tool.
pub struct ReadCollectionsTool;

impl ReadCollectionsTool {
    pub const NAME: &'static str = "read-collections";

    pub const DESCRIPTION: &'static str = "List all collections available in Directus, \
         including their meta and schema information.";

    pub fn definition() -> ToolDefinition {
        define_tool(Self::NAME, Self::DESCRIPTION, Self::execute)
    }

    #[instrument(skip_all)]
    pub async fn execute(client: SharedClient, _input: ReadCollectionsInput) -> ToolResponse {
        debug!("Listing collections");
        match client.request(read_collections()).await {
            Ok(result) => format_success(result),
            Err(e) => {
                warn!("Failed to list collections: {}", e);
                format_error(e)
            }
        }
    }
}

/// Read-collection tool.
pub struct ReadCollectionTool;

impl ReadCollectionTool {
    pub const NAME: &'static str = "read-collection";

    pub const DESCRIPTION: &'static str =
        "Retrieve a single collection from Directus by its unique name.";

    pub fn definition() -> ToolDefinition {
        define_tool(Self::NAME, Self::DESCRIPTION, Self::execute)
    }

    #[instrument(skip_all, fields(collection = %input.collection))]
    pub async fn execute(client: SharedClient, input: ReadCollectionInput) -> ToolResponse {
        debug!("Reading collection '{}'", input.collection);
        match client.request(read_collection(input.collection.as_str())).await {
            Ok(result) => format_success(result),
            Err(e) => {
                warn!("Failed to read collection '{}': {}", input.collection, e);
                format_error(e)
            }
        }
    }
}
