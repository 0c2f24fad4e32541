//! Tool descriptor factory.
//!
//! [`define_tool`] turns a name, a description and an async handler into a
//! [`ToolDefinition`]. The handler's input type is the tool's input contract:
//! its `JsonSchema` is published to clients and its `Deserialize` impl
//! validates raw arguments before the handler is ever called.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::error::ToolError;
use super::response::ToolResponse;
use crate::core::client::SharedClient;

/// Type-erased handler: validates raw arguments, then runs the tool.
pub type ToolHandler = Arc<
    dyn Fn(SharedClient, JsonObject) -> BoxFuture<'static, Result<ToolResponse, ToolError>>
        + Send
        + Sync,
>;

/// A registered tool: name, description, input contract and handler.
#[derive(Clone)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Arc<JsonObject>,
    pub handler: ToolHandler,
}

impl std::fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Build a tool from its handler. `I` is the input contract.
pub fn define_tool<I, F, Fut>(
    name: &'static str,
    description: &'static str,
    handler: F,
) -> ToolDefinition
where
    I: DeserializeOwned + JsonSchema + Send + 'static,
    F: Fn(SharedClient, I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ToolResponse> + Send + 'static,
{
    let handler = Arc::new(handler);
    let erased: ToolHandler = Arc::new(move |client: SharedClient, arguments: JsonObject| {
        let handler = handler.clone();
        async move {
            let input = parse_input::<I>(name, arguments)?;
            Ok(handler(client, input).await)
        }
        .boxed()
    });

    ToolDefinition {
        name,
        description,
        input_schema: cached_schema_for_type::<I>(),
        handler: erased,
    }
}

fn parse_input<I: DeserializeOwned>(tool: &str, arguments: JsonObject) -> Result<I, ToolError> {
    serde_json::from_value(Value::Object(arguments)).map_err(|e| {
        warn!("Rejected arguments for {}: {}", tool, e);
        ToolError::invalid_arguments(e.to_string())
    })
}

impl ToolDefinition {
    /// Validate `arguments` and run the handler.
    pub async fn invoke(
        &self,
        client: SharedClient,
        arguments: JsonObject,
    ) -> Result<ToolResponse, ToolError> {
        (self.handler)(client, arguments).await
    }

    /// Same as [`invoke`](Self::invoke) for an arbitrary JSON value.
    ///
    /// `null` counts as "no arguments"; any other non-object is rejected.
    pub async fn invoke_value(
        &self,
        client: SharedClient,
        arguments: Value,
    ) -> Result<ToolResponse, ToolError> {
        match arguments {
            Value::Object(map) => self.invoke(client, map).await,
            Value::Null => self.invoke(client, JsonObject::new()).await,
            _ => Err(ToolError::invalid_arguments(
                "tool arguments must be a JSON object",
            )),
        }
    }

    /// Tool metadata as advertised over MCP.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.input_schema.clone(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Run the tool the way the rmcp router does: missing arguments count as
    /// an empty object and contract violations become MCP errors.
    pub async fn dispatch(
        &self,
        client: SharedClient,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(client, arguments.unwrap_or_default())
            .await
            .map(CallToolResult::from)
            .map_err(|e| e.to_mcp_error())
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(&self, client: SharedClient) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        let definition = self.clone();
        ToolRoute::new_dyn(self.to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let definition = definition.clone();
            let client = client.clone();
            async move { definition.dispatch(client, args).await }.boxed()
        })
    }
}
