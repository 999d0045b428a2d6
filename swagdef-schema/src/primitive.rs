//! Primitive schema kinds.

/// The declared `type` of a schema node.
///
/// This is a language-agnostic representation of schema primitives.
/// Use `TypeMapper` to convert to language-specific type strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    File,
    /// Missing or unrecognized `type`.
    #[default]
    Unknown,
}

impl PrimitiveKind {
    /// All recognized kinds, excluding [`PrimitiveKind::Unknown`].
    pub const ALL: [PrimitiveKind; 7] = [
        PrimitiveKind::String,
        PrimitiveKind::Integer,
        PrimitiveKind::Number,
        PrimitiveKind::Boolean,
        PrimitiveKind::Object,
        PrimitiveKind::Array,
        PrimitiveKind::File,
    ];

    /// Parse a schema `type` name. Unrecognized names map to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "string" => PrimitiveKind::String,
            "integer" => PrimitiveKind::Integer,
            "number" => PrimitiveKind::Number,
            "boolean" => PrimitiveKind::Boolean,
            "object" => PrimitiveKind::Object,
            "array" => PrimitiveKind::Array,
            "file" => PrimitiveKind::File,
            _ => PrimitiveKind::Unknown,
        }
    }

    /// Get the schema type name
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Object => "object",
            PrimitiveKind::Array => "array",
            PrimitiveKind::File => "file",
            PrimitiveKind::Unknown => "unknown",
        }
    }
}
