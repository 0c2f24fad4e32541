//! Input types shared by the collection tools.

use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::core::client::collections::STRUCTURAL_KEYS;

/// Collection identifier. Must not be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionName(String);

impl CollectionName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CollectionName {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err("collection name must not be empty");
        }
        Ok(Self(value))
    }
}

impl<'de> Deserialize<'de> for CollectionName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::try_from(raw).map_err(D::Error::custom)
    }
}

impl JsonSchema for CollectionName {
    fn schema_name() -> Cow<'static, str> {
        "CollectionName".into()
    }

    fn inline_schema() -> bool {
        true
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "minLength": 1,
            "pattern": "\\S"
        })
    }
}

/// Free-form collection metadata merged into the top level of a create request.
///
/// Keys that would shadow `collection`, `schema` or `fields` are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionMeta(Map<String, Value>);

impl CollectionMeta {
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl<'de> Deserialize<'de> for CollectionMeta {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        if let Some(key) = map.keys().find(|k| STRUCTURAL_KEYS.contains(&k.as_str())) {
            return Err(D::Error::custom(format!(
                "meta must not contain the reserved key `{key}`"
            )));
        }
        Ok(Self(map))
    }
}

impl JsonSchema for CollectionMeta {
    fn schema_name() -> Cow<'static, str> {
        "CollectionMeta".into()
    }

    fn inline_schema() -> bool {
        true
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "object",
            "additionalProperties": true,
            "propertyNames": {
                "not": { "enum": STRUCTURAL_KEYS }
            }
        })
    }
}
