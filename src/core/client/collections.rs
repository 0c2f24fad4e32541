//! Collection payloads and command builders.
//!
//! Builders mirror the Directus REST endpoints under `/collections`.

use std::borrow::Cow;

use reqwest::Method;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::RestCommand;

const COLLECTIONS: &str = "collections";

/// Keys a [`CollectionDescriptor`] always writes itself.
pub const STRUCTURAL_KEYS: [&str; 3] = ["collection", "schema", "fields"];

// ============================================================================
// Schema-or-null
// ============================================================================

/// Database schema of a collection.
///
/// `Untyped` (sent as `null`) creates a folder: a collection with no backing
/// table.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionSchema {
    Typed(Map<String, Value>),
    Untyped,
}

impl CollectionSchema {
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Untyped)
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Typed(map) => Value::Object(map.clone()),
            Self::Untyped => Value::Null,
        }
    }
}

// Deserializing through `Value` keeps the field required: a missing `schema`
// is an error, only an explicit `null` maps to `Untyped`.
impl<'de> Deserialize<'de> for CollectionSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(Self::Typed(map)),
            Value::Null => Ok(Self::Untyped),
            other => Err(D::Error::custom(format!(
                "invalid schema: expected an object or null, found {}",
                kind_of(&other)
            ))),
        }
    }
}

impl JsonSchema for CollectionSchema {
    fn schema_name() -> Cow<'static, str> {
        "CollectionSchema".into()
    }

    fn inline_schema() -> bool {
        true
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": ["object", "null"],
            "description": "Schema definition for the collection, or null for a folder."
        })
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// A field created together with its collection.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FieldDefinition {
    /// Field key.
    pub field: String,

    /// Directus field type (e.g. "string", "integer", "uuid").
    #[serde(rename = "type")]
    pub field_type: String,

    /// Interface used to edit the field in the app (e.g. "input").
    pub interface: String,
}

impl FieldDefinition {
    fn to_value(&self) -> Value {
        serde_json::json!({
            "field": self.field,
            "type": self.field_type,
            "interface": self.interface,
        })
    }
}

/// Request body for collection creation.
///
/// `extra` holds free-form metadata emitted at the top level of the body.
/// Structural keys always win over extension keys with the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDescriptor {
    pub collection: String,
    pub schema: CollectionSchema,
    pub fields: Option<Vec<FieldDefinition>>,
    pub extra: Map<String, Value>,
}

impl CollectionDescriptor {
    pub fn new(collection: impl Into<String>, schema: CollectionSchema) -> Self {
        Self {
            collection: collection.into(),
            schema,
            fields: None,
            extra: Map::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Render the JSON body sent to Directus.
    pub fn to_body(&self) -> Value {
        let mut body = self.extra.clone();
        body.insert(
            "collection".to_string(),
            Value::String(self.collection.clone()),
        );
        body.insert("schema".to_string(), self.schema.to_value());
        match &self.fields {
            Some(fields) => {
                body.insert(
                    "fields".to_string(),
                    Value::Array(fields.iter().map(FieldDefinition::to_value).collect()),
                );
            }
            None => {
                body.remove("fields");
            }
        }
        Value::Object(body)
    }
}

/// Request body for collection updates. Only `meta` is writable.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionUpdate {
    pub meta: Map<String, Value>,
}

impl CollectionUpdate {
    pub fn to_body(&self) -> Value {
        serde_json::json!({ "meta": self.meta })
    }
}

// ============================================================================
// Command builders
// ============================================================================

/// `POST /collections`
pub fn create_collection(item: &CollectionDescriptor) -> RestCommand {
    RestCommand::new(Method::POST, [COLLECTIONS]).with_body(item.to_body())
}

/// `PATCH /collections/{collection}`
pub fn update_collection(collection: &str, item: &CollectionUpdate) -> RestCommand {
    RestCommand::new(Method::PATCH, [COLLECTIONS, collection]).with_body(item.to_body())
}

/// `GET /collections`
pub fn read_collections() -> RestCommand {
    RestCommand::new(Method::GET, [COLLECTIONS])
}

/// `GET /collections/{collection}`
pub fn read_collection(collection: &str) -> RestCommand {
    RestCommand::new(Method::GET, [COLLECTIONS, collection])
}

/// `DELETE /collections/{collection}`
pub fn delete_collection(collection: &str) -> RestCommand {
    RestCommand::new(Method::DELETE, [COLLECTIONS, collection])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_schema_accepts_object_and_null() {
        let typed: CollectionSchema = serde_json::from_value(json!({"name": "articles"})).unwrap();
        assert_eq!(typed, CollectionSchema::Typed(object(json!({"name": "articles"}))));

        let folder: CollectionSchema = serde_json::from_value(Value::Null).unwrap();
        assert!(folder.is_folder());
    }

    #[test]
    fn test_schema_rejects_other_shapes() {
        for bad in [json!("table"), json!(1), json!(true), json!([])] {
            let err = serde_json::from_value::<CollectionSchema>(bad).unwrap_err();
            assert!(err.to_string().contains("expected an object or null"));
        }
    }

    #[test]
    fn test_schema_is_required_when_missing() {
        #[derive(Debug, Deserialize)]
        struct Holder {
            #[allow(dead_code)]
            schema: CollectionSchema,
        }

        let err = serde_json::from_value::<Holder>(json!({})).unwrap_err();
        assert!(err.to_string().contains("missing field `schema`"));
    }

    #[test]
    fn test_descriptor_body_without_fields() {
        let descriptor = CollectionDescriptor::new("folder1", CollectionSchema::Untyped);
        assert_eq!(
            descriptor.to_body(),
            json!({"collection": "folder1", "schema": null})
        );
    }

    #[test]
    fn test_descriptor_body_with_fields_and_extra() {
        let descriptor = CollectionDescriptor::new("articles", CollectionSchema::Typed(Map::new()))
            .with_fields(vec![FieldDefinition {
                field: "title".into(),
                field_type: "string".into(),
                interface: "input".into(),
            }])
            .with_extra(object(json!({"icon": "article", "note": "Blog posts"})));

        assert_eq!(
            descriptor.to_body(),
            json!({
                "collection": "articles",
                "schema": {},
                "fields": [{"field": "title", "type": "string", "interface": "input"}],
                "icon": "article",
                "note": "Blog posts"
            })
        );
    }

    #[test]
    fn test_structural_keys_win_over_extra() {
        let descriptor = CollectionDescriptor::new("articles", CollectionSchema::Untyped)
            .with_extra(object(json!({"collection": "other", "schema": {}, "fields": []})));

        assert_eq!(
            descriptor.to_body(),
            json!({"collection": "articles", "schema": null})
        );
    }

    #[test]
    fn test_builders() {
        let update = CollectionUpdate {
            meta: object(json!({"icon": "star"})),
        };
        let command = update_collection("articles", &update);
        assert_eq!(command.method, Method::PATCH);
        assert_eq!(command.path(), "/collections/articles");
        assert_eq!(command.body, Some(json!({"meta": {"icon": "star"}})));

        assert_eq!(read_collections().method, Method::GET);
        assert_eq!(read_collection("a").path(), "/collections/a");
        assert_eq!(delete_collection("a").method, Method::DELETE);
        assert!(delete_collection("a").body.is_none());
    }
}
