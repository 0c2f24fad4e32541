//! Response envelope shared by every tool.
//!
//! Handlers finish with [`format_success`] or [`format_error`], so callers of
//! any tool see the same two payload shapes and branch on the envelope kind
//! instead of on protocol errors.

use rmcp::model::{CallToolResult, Content};
use serde_json::{Value, json};

use crate::core::client::ClientError;

/// Outcome of one tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResponse {
    /// The remote result, untouched.
    Success(Value),

    /// A failure with a readable message and optional structured detail.
    Failure {
        message: String,
        detail: Option<Value>,
    },
}

impl ToolResponse {
    /// Failure carrying only a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
            detail: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The success payload, if any.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message, .. } => Some(message),
        }
    }

    /// JSON body rendered into the text content of the MCP result.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success(value) => value.clone(),
            Self::Failure { message, detail } => match detail {
                Some(detail) => json!({ "error": message, "details": detail }),
                None => json!({ "error": message }),
            },
        }
    }
}

/// Wrap a successful result.
pub fn format_success(result: Value) -> ToolResponse {
    ToolResponse::Success(result)
}

/// Wrap any failure.
///
/// Directus API errors contribute their status and `errors` list as detail;
/// other errors contribute their source chain. Never fails.
pub fn format_error(error: impl Into<anyhow::Error>) -> ToolResponse {
    let error = error.into();
    let message = error.to_string();

    let detail = match error.downcast_ref::<ClientError>() {
        Some(client_error) => client_error.detail(),
        None => {
            let causes: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
            (!causes.is_empty()).then(|| json!({ "causes": causes }))
        }
    };

    ToolResponse::Failure { message, detail }
}

fn render(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

impl From<ToolResponse> for CallToolResult {
    fn from(response: ToolResponse) -> Self {
        let text = render(&response.to_json());
        if response.is_success() {
            CallToolResult::success(vec![Content::text(text)])
        } else {
            CallToolResult::error(vec![Content::text(text)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_success_keeps_payload_verbatim() {
        let payload = json!({"collection": "articles", "meta": {"icon": "star"}, "schema": null});
        let response = format_success(payload.clone());
        assert_eq!(response.payload(), Some(&payload));
        assert_eq!(response.to_json(), payload);
    }

    #[test]
    fn test_error_from_directus_api() {
        let err = ClientError::from_response(
            403,
            r#"{"errors":[{"message":"You don't have permission to access this.","extensions":{"code":"FORBIDDEN"}}]}"#,
        );
        let response = format_error(err);

        match &response {
            ToolResponse::Failure { message, detail } => {
                assert!(message.contains("You don't have permission"));
                let detail = detail.as_ref().expect("detail present");
                assert_eq!(detail["status"], 403);
                assert_eq!(detail["errors"][0]["code"], "FORBIDDEN");
            }
            other => panic!("Expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_error_from_plain_message() {
        let response = format_error(anyhow::anyhow!("something odd"));
        assert_eq!(response, ToolResponse::failure("something odd"));
    }

    #[test]
    fn test_error_keeps_source_chain() {
        let io = std::io::Error::other("connection reset");
        let response = format_error(anyhow::Error::new(io).context("sending request"));

        match response {
            ToolResponse::Failure { message, detail } => {
                assert_eq!(message, "sending request");
                assert_eq!(detail.unwrap()["causes"][0], "connection reset");
            }
            other => panic!("Expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_into_call_tool_result() {
        let ok: CallToolResult = format_success(json!([1, 2])).into();
        assert_eq!(ok.is_error, Some(false));
        let parsed: Value = serde_json::from_str(text_of(&ok)).unwrap();
        assert_eq!(parsed, json!([1, 2]));

        let failed: CallToolResult = ToolResponse::failure("nope").into();
        assert_eq!(failed.is_error, Some(true));
        let parsed: Value = serde_json::from_str(text_of(&failed)).unwrap();
        assert_eq!(parsed, json!({"error": "nope"}));
    }
}
