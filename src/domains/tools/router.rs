//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Every definition knows how to turn itself into a route, so this module
//! only folds the list together.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::all_tools;
use crate::core::client::SharedClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: SharedClient) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    all_tools()
        .iter()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(tool.create_route(client.clone()))
        })
}
