//! reqwest-backed Directus client.

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use super::{ClientError, DirectusApi, RestCommand};
use crate::core::config::DirectusConfig;

const USER_AGENT: &str = concat!("directus-mcp-server/", env!("CARGO_PKG_VERSION"));

/// Directus client authenticating with a static access token.
#[derive(Clone)]
pub struct DirectusClient {
    base_url: Url,
    token: Option<String>,
    http: HttpClient,
}

impl std::fmt::Debug for DirectusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectusClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl DirectusClient {
    /// Create a client for the Directus instance at `base_url`.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::invalid_url(format!("{base_url}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ClientError::invalid_url(format!(
                "{base_url}: expected an http(s) base URL"
            )));
        }

        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self {
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
            http,
        })
    }

    /// Create a client from configuration.
    pub fn from_config(config: &DirectusConfig) -> Result<Self, ClientError> {
        Self::new(&config.url, config.token.clone())
    }

    /// The Directus base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, segments: &[String]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl DirectusApi for DirectusClient {
    #[instrument(skip_all, fields(method = %command.method, path = %command.path()))]
    async fn request(&self, command: RestCommand) -> Result<Value, ClientError> {
        let url = self.endpoint_url(&command.segments)?;
        debug!("Sending Directus request to {}", url);

        let mut request = self.http.request(command.method, url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &command.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("Directus request failed: {}", e);
            ClientError::Transport(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("Directus responded with {}", status);
            return Err(ClientError::from_response(status.as_u16(), &text));
        }

        if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            return Ok(Value::Null);
        }

        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| ClientError::invalid_response(format!("invalid json body: {e}")))?;
        Ok(unwrap_data(payload))
    }
}

/// Directus wraps results in `{"data": ...}`.
fn unwrap_data(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::{
        CollectionDescriptor, CollectionSchema, CollectionUpdate, create_collection,
        delete_collection, read_collections, update_collection,
    };
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_rejects_non_http_url() {
        assert!(matches!(
            DirectusClient::new("ftp://example.com", None),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            DirectusClient::new("not a url", None),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = DirectusClient::new("http://localhost:8055", Some("secret-token".into())).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_endpoint_url_keeps_base_path_and_encodes_segments() {
        let client = DirectusClient::new("https://cms.example.com/directus/", None).unwrap();
        let url = client
            .endpoint_url(&["collections".to_string(), "my collection".to_string()])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://cms.example.com/directus/collections/my%20collection"
        );
    }

    #[tokio::test]
    async fn test_create_collection_contract() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/collections"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(json!({"collection": "folder1", "schema": null})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"collection": "folder1", "meta": {"icon": "folder"}, "schema": null}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = DirectusClient::new(&server.uri(), Some("test-token".into())).unwrap();
        let descriptor = CollectionDescriptor::new("folder1", CollectionSchema::Untyped);
        let result = client.request(create_collection(&descriptor)).await.unwrap();

        assert_eq!(
            result,
            json!({"collection": "folder1", "meta": {"icon": "folder"}, "schema": null})
        );
    }

    #[tokio::test]
    async fn test_update_collection_contract() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/collections/articles"))
            .and(body_json(json!({"meta": {"icon": "star"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"collection": "articles", "meta": {"icon": "star"}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = DirectusClient::new(&server.uri(), None).unwrap();
        let mut meta = serde_json::Map::new();
        meta.insert("icon".into(), json!("star"));
        let result = client
            .request(update_collection("articles", &CollectionUpdate { meta }))
            .await
            .unwrap();

        assert_eq!(result["meta"]["icon"], "star");
    }

    #[tokio::test]
    async fn test_api_error_is_parsed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/collections"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "errors": [{"message": "Invalid user credentials.", "extensions": {"code": "INVALID_CREDENTIALS"}}]
            })))
            .mount(&server)
            .await;

        let client = DirectusClient::new(&server.uri(), Some("bad".into())).unwrap();
        let err = client.request(read_collections()).await.unwrap_err();

        match err {
            ClientError::Api {
                status,
                message,
                errors,
            } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid user credentials.");
                assert_eq!(errors[0].code.as_deref(), Some("INVALID_CREDENTIALS"));
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_content_yields_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/collections/articles"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = DirectusClient::new(&server.uri(), None).unwrap();
        let result = client.request(delete_collection("articles")).await.unwrap();
        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn test_invalid_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/collections"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = DirectusClient::new(&server.uri(), None).unwrap();
        let err = client.request(read_collections()).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_unwrap_data() {
        assert_eq!(unwrap_data(json!({"data": [1, 2]})), json!([1, 2]));
        assert_eq!(unwrap_data(json!({"other": 1})), json!({"other": 1}));
        assert_eq!(unwrap_data(json!([1])), json!([1]));
    }
}
