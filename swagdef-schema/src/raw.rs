//! Raw serde shapes of Swagger/OpenAPI documents.
//!
//! These mirror the JSON one-to-one and are only used during ingestion.
//! Everything downstream works on [`SchemaNode`](crate::SchemaNode).

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// A schema object exactly as it appears in the document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSchema {
    pub description: Option<String>,
    pub example: Option<Value>,
    /// Usually a string; JSON Schema also allows a list of type names.
    #[serde(rename = "type")]
    pub ty: Option<Value>,
    pub properties: Option<IndexMap<String, RawSchema>>,
    pub all_of: Option<Vec<RawSchema>>,
    /// Either a property map, a boolean, or something we can't interpret.
    pub additional_properties: Option<Value>,
    pub items: Option<Box<RawSchema>>,
    #[serde(rename = "enum")]
    pub enumeration: Option<Vec<Value>>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    #[serde(rename = "x-nullable", alias = "x_nullable")]
    pub x_nullable: Option<bool>,
}

impl RawSchema {
    /// The declared type name, if any.
    ///
    /// For a list of type names the first non-`null` entry wins.
    pub fn type_name(&self) -> Option<&str> {
        match self.ty.as_ref()? {
            Value::String(name) => Some(name.as_str()),
            Value::Array(names) => names
                .iter()
                .filter_map(Value::as_str)
                .find(|name| *name != "null"),
            _ => None,
        }
    }
}

/// Top-level document. Only the parts that carry definitions are read.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDocument {
    pub definitions: Option<IndexMap<String, RawSchema>>,
    pub components: Option<RawComponents>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawComponents {
    pub schemas: Option<IndexMap<String, RawSchema>>,
}

impl RawDocument {
    /// Take the definitions map, preferring Swagger 2 `definitions`.
    pub fn into_definitions(self) -> Option<IndexMap<String, RawSchema>> {
        self.definitions
            .or_else(|| self.components.and_then(|c| c.schemas))
    }
}
