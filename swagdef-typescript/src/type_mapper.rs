//! TypeScript type mapper implementation.

use swagdef_codegen::TypeMapper;
use swagdef_schema::PrimitiveKind;

use crate::naming::member_name;

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::String => "string",
            PrimitiveKind::Integer => "number",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Object => "object",
            PrimitiveKind::Array => "Array<any>",
            PrimitiveKind::File => "Blob",
            PrimitiveKind::Unknown => "any",
        }
    }

    fn map_array(&self, inner: &str) -> String {
        format!("Array<{}>", inner)
    }

    fn map_object(&self, members: &[(String, String)]) -> String {
        if members.is_empty() {
            return "{}".to_string();
        }

        let fields: Vec<String> = members
            .iter()
            .map(|(name, ty)| format!("{}: {}", member_name(name), ty))
            .collect();
        format!("{{ {} }}", fields.join(", "))
    }
}
