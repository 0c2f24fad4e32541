//! Create-collection tool definition.
//!
//! Creates a collection (or a folder, when `schema` is null), optionally with
//! an initial set of fields.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::contract::{CollectionMeta, CollectionName};
use crate::core::client::{
    CollectionDescriptor, CollectionSchema, FieldDefinition, SharedClient, create_collection,
};
use crate::domains::tools::definition::{ToolDefinition, define_tool};
use crate::domains::tools::response::{ToolResponse, format_error, format_success};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create-collection tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCollectionInput {
    /// Unique name of the collection.
    pub collection: CollectionName,

    /// Schema definition for the collection, or null for a folder.
    pub schema: CollectionSchema,

    /// Fields to be created in the collection.
    #[serde(default)]
    pub fields: Option<Vec<FieldDefinition>>,

    /// Optional meta properties for the collection.
    #[serde(default)]
    pub meta: Option<CollectionMeta>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create-collection tool.
pub struct CreateCollectionTool;

impl CreateCollectionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create-collection";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new collection in Directus. \
         The 'collection' and 'schema' properties are required. \
         You can also provide an array of 'fields' to be created during the creation of the collection.";

    pub fn definition() -> ToolDefinition {
        define_tool(Self::NAME, Self::DESCRIPTION, Self::execute)
    }

    /// Assemble the request body from validated input.
    pub fn build_descriptor(input: CreateCollectionInput) -> CollectionDescriptor {
        let CreateCollectionInput {
            collection,
            schema,
            fields,
            meta,
        } = input;

        let mut descriptor = CollectionDescriptor::new(collection.into_inner(), schema);
        if let Some(fields) = fields {
            descriptor = descriptor.with_fields(fields);
        }
        if let Some(meta) = meta {
            descriptor = descriptor.with_extra(meta.into_inner());
        }
        descriptor
    }

    #[instrument(skip_all, fields(collection = %input.collection))]
    pub async fn execute(client: SharedClient, input: CreateCollectionInput) -> ToolResponse {
        let descriptor = Self::build_descriptor(input);
        info!(
            "Creating collection '{}' ({})",
            descriptor.collection,
            if descriptor.schema.is_folder() { "folder" } else { "table" }
        );

        match client.request(create_collection(&descriptor)).await {
            Ok(result) => format_success(result),
            Err(e) => {
                warn!("Failed to create collection '{}': {}", descriptor.collection, e);
                format_error(e)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::DirectusClient;
    use crate::core::client::stub::{RecordingClient, shared};
    use crate::domains::tools::ToolError;
    use reqwest::Method;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn input(value: Value) -> CreateCollectionInput {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_create_with_fields() {
        let reply = json!({"collection": "articles", "meta": null, "schema": {"name": "articles"}});
        let client = RecordingClient::ok(reply.clone());

        let response = CreateCollectionTool::execute(
            shared(&client),
            input(json!({
                "collection": "articles",
                "schema": {},
                "fields": [{"field": "title", "type": "string", "interface": "input"}]
            })),
        )
        .await;

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::POST);
        assert_eq!(calls[0].path(), "/collections");
        assert_eq!(
            calls[0].body,
            Some(json!({
                "collection": "articles",
                "schema": {},
                "fields": [{"field": "title", "type": "string", "interface": "input"}]
            }))
        );
        assert_eq!(response, ToolResponse::Success(reply));
    }

    #[tokio::test]
    async fn test_create_folder_has_no_fields_key() {
        let client = RecordingClient::ok(json!({"collection": "folder1"}));

        CreateCollectionTool::execute(
            shared(&client),
            input(json!({"collection": "folder1", "schema": null})),
        )
        .await;

        let body = client.calls()[0].body.clone().unwrap();
        assert_eq!(body, json!({"collection": "folder1", "schema": null}));
        assert!(body.get("fields").is_none());
    }

    #[tokio::test]
    async fn test_meta_is_merged_at_top_level() {
        let client = RecordingClient::ok(json!({}));

        CreateCollectionTool::execute(
            shared(&client),
            input(json!({
                "collection": "articles",
                "schema": {"comment": "posts"},
                "meta": {"icon": "article", "hidden": false}
            })),
        )
        .await;

        assert_eq!(
            client.calls()[0].body,
            Some(json!({
                "collection": "articles",
                "schema": {"comment": "posts"},
                "icon": "article",
                "hidden": false
            }))
        );
    }

    #[tokio::test]
    async fn test_remote_failure_becomes_failure_envelope() {
        let client = RecordingClient::failing(403, "You don't have permission to access this.");

        let response = CreateCollectionTool::execute(
            shared(&client),
            input(json!({"collection": "articles", "schema": {}})),
        )
        .await;

        assert_eq!(client.call_count(), 1);
        assert!(!response.is_success());
        assert!(response.message().unwrap().contains("permission"));
    }

    #[tokio::test]
    async fn test_unreachable_directus_becomes_failure_envelope() {
        let client = DirectusClient::new("http://127.0.0.1:1", None).unwrap();

        let response = CreateCollectionTool::execute(
            Arc::new(client),
            input(json!({"collection": "articles", "schema": {}})),
        )
        .await;

        match response {
            ToolResponse::Failure { message, detail } => {
                assert!(message.starts_with("Request to Directus failed"));
                let detail = detail.expect("transport detail");
                assert_eq!(detail["connect"], true);
                assert_eq!(detail["status"], Value::Null);
            }
            other => panic!("Expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_remote() {
        let client = RecordingClient::ok(json!({}));
        let tool = CreateCollectionTool::definition();

        let cases = [
            json!({"schema": {}}),
            json!({"collection": "", "schema": {}}),
            json!({"collection": "articles"}),
            json!({"collection": "articles", "schema": "table"}),
            json!({"collection": "articles", "schema": 3}),
            json!({"collection": "articles", "schema": {}, "extra": true}),
            json!({"collection": "articles", "schema": {}, "fields": [{"field": "title"}]}),
            json!({"collection": "articles", "schema": {}, "meta": {"schema": null}}),
        ];

        for case in cases {
            let result = tool.invoke_value(shared(&client), case.clone()).await;
            assert!(
                matches!(result, Err(ToolError::InvalidArguments(_))),
                "expected rejection for {case}"
            );
        }
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_input_schema_lists_required_fields() {
        let tool = CreateCollectionTool::definition();
        let required = tool.input_schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("collection")));
        assert!(required.contains(&json!("schema")));
        assert!(!required.contains(&json!("fields")));
        assert_eq!(tool.input_schema["additionalProperties"], false);
    }
}
