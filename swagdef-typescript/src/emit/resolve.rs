use swagdef_codegen::TypeRef;
use swagdef_schema::{PrimitiveKind, SchemaNode};

use super::{EmissionContext, emit_enum};
use crate::naming::normalize_key;

/// Resolve the type of the property `property_key` of `definition_name`.
///
/// Enums found in array items and inside inline objects are emitted into
/// `ctx` as named declarations, since TypeScript cannot spell them inline.
/// An enum on `node` itself is only named here; the caller emits it.
pub fn resolve_type(
    ctx: &mut EmissionContext,
    definition_name: &str,
    property_key: &str,
    node: &SchemaNode,
) -> TypeRef {
    tracing::trace!(definition_name, property_key, kind = node.kind_name(), "resolving type");

    if node.ty == PrimitiveKind::Array
        && let Some(items) = node.items()
    {
        if items.is_enum() {
            emit_enum(ctx, &format!("{definition_name}{property_key}"), items);
        }
        return TypeRef::array(resolve_type(ctx, definition_name, property_key, items));
    }

    if node.is_enum() {
        return TypeRef::named(format!("{definition_name}{property_key}"));
    }

    if node.ty == PrimitiveKind::Object
        && let Some(properties) = node.properties()
    {
        let mut members = Vec::with_capacity(properties.len());
        for (key, property) in properties {
            let key = normalize_key(key);
            if property.is_enum() {
                emit_enum(ctx, &format!("{definition_name}{key}"), property);
            }
            let ty = resolve_type(ctx, definition_name, &key, property);
            members.push((key, ty));
        }
        return TypeRef::Object(members);
    }

    match node.reference_name() {
        Some(name) => TypeRef::named(name),
        None => TypeRef::primitive(node.ty),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use swagdef_codegen::TypeMapper;

    use super::*;
    use crate::TypeScriptTypeMapper;

    fn node(value: serde_json::Value) -> SchemaNode {
        SchemaNode::from_json(value).unwrap()
    }

    fn resolve(ctx: &mut EmissionContext, value: serde_json::Value) -> String {
        let ty = resolve_type(ctx, "Foo", "bar", &node(value));
        TypeScriptTypeMapper.render_type(&ty)
    }

    #[test]
    fn test_every_primitive_maps_directly() {
        for kind in PrimitiveKind::ALL {
            let mut ctx = EmissionContext::new();
            let ty = resolve_type(&mut ctx, "Foo", "bar", &SchemaNode::primitive(kind));
            assert_eq!(ty, TypeRef::Primitive(kind));
            assert_eq!(
                TypeScriptTypeMapper.render_type(&ty),
                TypeScriptTypeMapper.map_primitive(kind)
            );
        }
    }

    #[test]
    fn test_missing_type_is_any() {
        let mut ctx = EmissionContext::new();
        assert_eq!(resolve(&mut ctx, json!({})), "any");
    }

    #[test]
    fn test_array_of_strings() {
        let mut ctx = EmissionContext::new();
        let ty = resolve(&mut ctx, json!({ "type": "array", "items": { "type": "string" } }));
        assert_eq!(ty, "Array<string>");
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_nested_arrays_of_references() {
        let mut ctx = EmissionContext::new();
        let ty = resolve(
            &mut ctx,
            json!({
                "type": "array",
                "items": { "type": "array", "items": { "$ref": "#/definitions/Tag" } }
            }),
        );
        assert_eq!(ty, "Array<Array<Tag>>");
    }

    #[test]
    fn test_items_without_array_type_fall_back_to_primitive() {
        let mut ctx = EmissionContext::new();
        assert_eq!(resolve(&mut ctx, json!({ "items": { "type": "string" } })), "any");
    }

    #[test]
    fn test_reference_is_stripped() {
        let mut ctx = EmissionContext::new();
        assert_eq!(resolve(&mut ctx, json!({ "$ref": "#/definitions/Widget" })), "Widget");
        assert_eq!(
            resolve(&mut ctx, json!({ "$ref": "#/components/schemas/Widget" })),
            "Widget"
        );
    }

    #[test]
    fn test_enum_is_named_but_not_emitted() {
        let mut ctx = EmissionContext::new();
        let ty = resolve(&mut ctx, json!({ "type": "string", "enum": ["a"] }));
        assert_eq!(ty, "Foobar");
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_array_of_enum_emits_the_enum() {
        let mut ctx = EmissionContext::new();
        let ty = resolve(
            &mut ctx,
            json!({ "type": "array", "items": { "type": "string", "enum": ["x", "y"] } }),
        );
        assert_eq!(ty, "Array<Foobar>");
        assert!(ctx.has_enum("Foobar"));
    }

    #[test]
    fn test_inline_object_hoists_nested_enums() {
        let mut ctx = EmissionContext::new();
        let ty = resolve(
            &mut ctx,
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer" },
                    "kind": { "type": "string", "enum": ["a", "b"] },
                    "owner.name": { "$ref": "#/definitions/User" }
                }
            }),
        );
        assert_eq!(ty, "{ id: number, kind: Fookind, owner_name: User }");
        assert!(ctx.has_enum("Fookind"));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_properties_without_object_type_fall_back_to_primitive() {
        let mut ctx = EmissionContext::new();
        let ty = resolve(&mut ctx, json!({ "properties": { "id": { "type": "integer" } } }));
        assert_eq!(ty, "any");
    }

    #[test]
    fn test_open_map_resolves_to_its_declared_type() {
        let mut ctx = EmissionContext::new();
        let ty = resolve(
            &mut ctx,
            json!({ "type": "object", "additionalProperties": { "type": "string" } }),
        );
        assert_eq!(ty, "object");
    }

    #[test]
    fn test_properties_win_over_additional_properties() {
        let mut ctx = EmissionContext::new();
        let ty = resolve(
            &mut ctx,
            json!({
                "type": "object",
                "properties": { "a": { "type": "string" } },
                "additionalProperties": { "b": { "type": "integer" } }
            }),
        );
        assert_eq!(ty, "{ a: string }");
    }

    #[test]
    fn test_array_items_win_over_properties() {
        let mut ctx = EmissionContext::new();
        let ty = resolve(
            &mut ctx,
            json!({
                "type": "array",
                "items": { "type": "string" },
                "properties": { "a": { "type": "integer" } }
            }),
        );
        assert_eq!(ty, "Array<string>");
    }

    #[test]
    fn test_array_items_win_over_enum() {
        let mut ctx = EmissionContext::new();
        let ty = resolve(
            &mut ctx,
            json!({
                "type": "array",
                "enum": ["x"],
                "items": { "$ref": "#/definitions/Tag" }
            }),
        );
        assert_eq!(ty, "Array<Tag>");
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_enum_wins_over_reference() {
        let mut ctx = EmissionContext::new();
        let ty = resolve(&mut ctx, json!({ "enum": ["x"], "$ref": "#/definitions/Tag" }));
        assert_eq!(ty, "Foobar");
    }

    #[test]
    fn test_reference_behind_properties_without_object_type() {
        let mut ctx = EmissionContext::new();
        let ty = resolve(
            &mut ctx,
            json!({ "properties": { "a": {} }, "$ref": "#/definitions/Widget" }),
        );
        assert_eq!(ty, "Widget");
    }
}
