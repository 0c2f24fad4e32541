//! Recording stand-in for the Directus API, used by handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::{ClientError, DirectusApi, RestCommand, SharedClient};

type Reply = Box<dyn Fn() -> Result<Value, ClientError> + Send + Sync>;

/// Records every command and answers with a canned reply.
pub(crate) struct RecordingClient {
    calls: Mutex<Vec<RestCommand>>,
    reply: Reply,
}

impl RecordingClient {
    /// Always succeed with `value`.
    pub(crate) fn ok(value: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Box::new(move || Ok(value.clone())),
        })
    }

    /// Always fail with a Directus API error.
    pub(crate) fn failing(status: u16, message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Box::new(move || {
                Err(ClientError::from_response(
                    status,
                    &serde_json::json!({
                        "errors": [{"message": message, "extensions": {"code": "FORBIDDEN"}}]
                    })
                    .to_string(),
                ))
            }),
        })
    }

    pub(crate) fn calls(&self) -> Vec<RestCommand> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DirectusApi for RecordingClient {
    async fn request(&self, command: RestCommand) -> Result<Value, ClientError> {
        self.calls.lock().unwrap().push(command);
        (self.reply)()
    }
}

/// Upcast helper for handler signatures.
pub(crate) fn shared(client: &Arc<RecordingClient>) -> SharedClient {
    client.clone()
}
