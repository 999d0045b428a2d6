//! Tagged schema model.
//!
//! A raw schema object can carry any combination of `enum`, `allOf`,
//! `additionalProperties`, `properties`, `items` and `$ref`. Ingestion picks
//! exactly one [`SchemaKind`] per node, in that precedence order, so code
//! generators dispatch on the tag instead of probing optional fields.
//!
//! `properties`, `items` and `$ref` that lose to a higher clause are kept on
//! the node. [`SchemaNode::properties`], [`SchemaNode::items`] and
//! [`SchemaNode::reference_name`] return them either way, for consumers that
//! check clauses in a different order than the tag.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{PrimitiveKind, raw::RawSchema};

/// Ordered property map. Insertion order is emission order.
pub type Properties = IndexMap<String, SchemaNode>;

/// A schema node, used both for named definitions and nested properties.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Human-readable description. Empty descriptions are dropped.
    pub description: Option<String>,
    /// Example value, kept as JSON.
    pub example: Option<Value>,
    /// Declared `type`.
    pub ty: PrimitiveKind,
    /// `x-nullable` flag.
    pub nullable: bool,
    /// Shape of the node.
    pub kind: SchemaKind,
    /// Shape fields present alongside `kind` but not picked as its tag.
    shadowed: Shadowed,
}

/// `properties`, `items` and `$ref` of a node whose tag went to another
/// clause. Type resolution checks these in its own order.
#[derive(Debug, Clone, Default, PartialEq)]
struct Shadowed {
    properties: Option<Properties>,
    items: Option<Box<SchemaNode>>,
    reference: Option<String>,
}

/// The shape of a schema node.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// `enum` clause with its values in declaration order.
    Enum(Vec<EnumValue>),
    /// `allOf` composition.
    Composed(Vec<SchemaNode>),
    /// `additionalProperties` used as a property map.
    OpenMap(Properties),
    /// Plain `properties`.
    Structured(Properties),
    /// `items` of an array.
    ArrayWrapper(Box<SchemaNode>),
    /// `$ref` to another definition, as written in the document.
    Reference(String),
    /// Nothing but a declared type.
    Primitive,
}

/// A literal value of an `enum` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumValue {
    String(String),
    Number(serde_json::Number),
    Boolean(bool),
}

impl EnumValue {
    /// Convert a JSON value. Returns `None` for `null`, arrays and objects.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(EnumValue::String(s)),
            Value::Number(n) => Some(EnumValue::Number(n)),
            Value::Bool(b) => Some(EnumValue::Boolean(b)),
            other => {
                tracing::warn!(value = %other, "skipping non-primitive enum value");
                None
            }
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::String(s) => f.write_str(s),
            EnumValue::Number(n) => write!(f, "{}", n),
            EnumValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl SchemaNode {
    /// A node with only a declared type.
    pub fn primitive(ty: PrimitiveKind) -> Self {
        Self {
            description: None,
            example: None,
            ty,
            nullable: false,
            kind: SchemaKind::Primitive,
            shadowed: Shadowed::default(),
        }
    }

    /// Parse a node from a JSON value.
    pub fn from_json(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    pub(crate) fn from_raw(raw: RawSchema) -> Self {
        let ty = raw.type_name().map_or(PrimitiveKind::Unknown, PrimitiveKind::from_name);
        let RawSchema {
            description,
            example,
            properties,
            all_of,
            additional_properties,
            items,
            enumeration,
            reference,
            x_nullable,
            ..
        } = raw;

        let mut shadowed = Shadowed {
            properties: properties.map(convert_properties),
            items: items.map(|items| Box::new(Self::from_raw(*items))),
            reference,
        };

        let kind = if let Some(values) = enumeration {
            SchemaKind::Enum(values.into_iter().filter_map(EnumValue::from_json).collect())
        } else if let Some(parts) = all_of {
            SchemaKind::Composed(parts.into_iter().map(Self::from_raw).collect())
        } else if let Some(map) = additional_properties.and_then(open_map) {
            SchemaKind::OpenMap(map)
        } else if let Some(properties) = shadowed.properties.take() {
            SchemaKind::Structured(properties)
        } else if let Some(items) = shadowed.items.take() {
            SchemaKind::ArrayWrapper(items)
        } else if let Some(reference) = shadowed.reference.take() {
            SchemaKind::Reference(reference)
        } else {
            SchemaKind::Primitive
        };

        Self {
            description: description.filter(|d| !d.is_empty()),
            example,
            ty,
            nullable: x_nullable.unwrap_or(false),
            kind,
            shadowed,
        }
    }

    /// Whether this node carries an `enum` clause.
    pub fn is_enum(&self) -> bool {
        matches!(self.kind, SchemaKind::Enum(_))
    }

    /// The `enum` values, if any.
    pub fn enum_values(&self) -> Option<&[EnumValue]> {
        match &self.kind {
            SchemaKind::Enum(values) => Some(values),
            _ => None,
        }
    }

    /// The `properties` clause, whether or not it decided the tag.
    pub fn properties(&self) -> Option<&Properties> {
        match &self.kind {
            SchemaKind::Structured(props) => Some(props),
            _ => self.shadowed.properties.as_ref(),
        }
    }

    /// The `additionalProperties` map of an open map node.
    pub fn additional_properties(&self) -> Option<&Properties> {
        match &self.kind {
            SchemaKind::OpenMap(props) => Some(props),
            _ => None,
        }
    }

    /// The `items` node, whether or not it decided the tag.
    pub fn items(&self) -> Option<&SchemaNode> {
        match &self.kind {
            SchemaKind::ArrayWrapper(items) => Some(items),
            _ => self.shadowed.items.as_deref(),
        }
    }

    /// The bare name a `$ref` points at, with its path stripped.
    ///
    /// `#/definitions/Widget` and `#/components/schemas/Widget` both yield `Widget`.
    pub fn reference_name(&self) -> Option<&str> {
        match &self.kind {
            SchemaKind::Reference(reference) => Some(reference.as_str()),
            _ => self.shadowed.reference.as_deref(),
        }
        .map(bare_reference_name)
    }

    /// Short name of the node's shape, for reports.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            SchemaKind::Enum(_) => "enum",
            SchemaKind::Composed(_) => "composed",
            SchemaKind::OpenMap(_) => "open map",
            SchemaKind::Structured(_) => "structured",
            SchemaKind::ArrayWrapper(_) => "array",
            SchemaKind::Reference(_) => "reference",
            SchemaKind::Primitive => "primitive",
        }
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawSchema::deserialize(deserializer).map(SchemaNode::from_raw)
    }
}

/// Strip the path of a `$ref`, keeping the last segment.
pub fn bare_reference_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

pub(crate) fn convert_properties(properties: IndexMap<String, RawSchema>) -> Properties {
    properties
        .into_iter()
        .map(|(key, raw)| (key, SchemaNode::from_raw(raw)))
        .collect()
}

/// Interpret `additionalProperties` as a property map.
///
/// `true` is an empty map, `false` means absent. Object entries that are not
/// themselves schema objects are skipped.
fn open_map(value: Value) -> Option<Properties> {
    match value {
        Value::Bool(true) => Some(Properties::new()),
        Value::Object(entries) => Some(
            entries
                .into_iter()
                .filter_map(|(key, value)| match serde_json::from_value::<RawSchema>(value) {
                    Ok(raw) => Some((key, SchemaNode::from_raw(raw))),
                    Err(err) => {
                        tracing::warn!(%key, %err, "skipping additionalProperties entry");
                        None
                    }
                })
                .collect(),
        ),
        _ => None,
    }
}
