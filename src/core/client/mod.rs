//! Directus REST client.
//!
//! Tools never talk HTTP directly. They build a [`RestCommand`] with one of the
//! builders in [`collections`] and hand it to a [`DirectusApi`] implementation,
//! which performs the request and returns the unwrapped `data` payload.
//!
//! - `collections.rs` - Collection payload types and command builders
//! - `http.rs` - reqwest-backed [`DirectusClient`]
//! - `error.rs` - Client error types

pub mod collections;
mod error;
mod http;

#[cfg(test)]
pub(crate) mod stub;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

pub use collections::{
    CollectionDescriptor, CollectionSchema, CollectionUpdate, FieldDefinition, create_collection,
    delete_collection, read_collection, read_collections, update_collection,
};
pub use error::{ApiErrorItem, ClientError};
pub use http::DirectusClient;

/// Shared handle to the remote API, injected into every tool handler.
pub type SharedClient = Arc<dyn DirectusApi>;

/// A single Directus REST operation.
///
/// Path segments are kept unencoded; the client percent-encodes them when
/// joining them onto its base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct RestCommand {
    /// HTTP method of the operation.
    pub method: Method,

    /// Path segments relative to the Directus base URL.
    pub segments: Vec<String>,

    /// Optional JSON request body.
    pub body: Option<Value>,
}

impl RestCommand {
    /// Create a command without a body.
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            body: None,
        }
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Slash-joined path, for logging.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// The remote API seam.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait DirectusApi: Send + Sync {
    /// Send a command and return the response payload.
    async fn request(&self, command: RestCommand) -> Result<Value, ClientError>;
}
