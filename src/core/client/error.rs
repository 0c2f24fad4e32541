//! Client error types.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// One entry of a Directus `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiErrorItem {
    /// Human-readable message.
    pub message: String,

    /// Machine-readable code from `extensions.code` (e.g. `FORBIDDEN`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Errors returned by the Directus client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Directus answered with a non-success status.
    #[error("Directus API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        errors: Vec<ApiErrorItem>,
    },

    /// The request never produced a response.
    #[error("Request to Directus failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body could not be decoded.
    #[error("Invalid response from Directus: {0}")]
    InvalidResponse(String),

    /// The configured base URL cannot be used.
    #[error("Invalid Directus URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Build an API error from a status code and raw response body.
    ///
    /// Directus reports failures as `{"errors": [{"message": .., "extensions": {"code": ..}}]}`.
    /// The first message becomes the summary; bodies in any other shape are
    /// kept verbatim.
    pub fn from_response(status: u16, body: &str) -> Self {
        let errors = parse_error_items(body);
        let message = errors
            .first()
            .map(|e| e.message.clone())
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| format!("HTTP {status}"));

        Self::Api {
            status,
            message,
            errors,
        }
    }

    /// Create an "invalid URL" error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Create an "invalid response" error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Structured detail for response envelopes.
    pub fn detail(&self) -> Option<Value> {
        match self {
            Self::Api { status, errors, .. } => Some(serde_json::json!({
                "status": status,
                "errors": errors,
            })),
            Self::Transport(e) => Some(serde_json::json!({
                "status": e.status().map(|s| s.as_u16()),
                "timeout": e.is_timeout(),
                "connect": e.is_connect(),
            })),
            _ => None,
        }
    }
}

fn parse_error_items(body: &str) -> Vec<ApiErrorItem> {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return Vec::new();
    };

    value
        .get("errors")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let message = item.get("message").and_then(Value::as_str)?;
                    let code = item
                        .get("extensions")
                        .and_then(|ext| ext.get("code"))
                        .and_then(Value::as_str)
                        .map(ToString::to_string);
                    Some(ApiErrorItem {
                        message: message.to_string(),
                        code,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}
