//! Doc text for definitions and properties.

use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};
use swagdef_schema::{PrimitiveKind, SchemaNode};

/// Build the doc text for a node from its description and example.
///
/// The text always starts with a line break, so this returns `Some` for every
/// node. Docs without content are dropped later, when rendered.
pub fn describe(node: &SchemaNode) -> Option<String> {
    let mut text = String::from("\n");

    if let Some(description) = &node.description {
        text.push_str(description);
        text.push('\n');
    }

    if let Some(example) = &node.example {
        text.push_str("\nExample:");
        match node.ty {
            PrimitiveKind::Array | PrimitiveKind::Object => {
                text.push_str("\n```json\n");
                text.push_str(&pretty_json(example));
                text.push_str("\n```");
            }
            PrimitiveKind::String => {
                text.push_str(" \"");
                text.push_str(&literal_text(example));
                text.push('"');
            }
            PrimitiveKind::Integer | PrimitiveKind::Boolean => {
                text.push(' ');
                text.push_str(&literal_text(example));
            }
            _ => {}
        }
    }

    if text.is_empty() { None } else { Some(text) }
}

/// Strings print without quotes, everything else as JSON.
fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Pretty-print JSON with one tab per level.
fn pretty_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    if value.serialize(&mut ser).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}
