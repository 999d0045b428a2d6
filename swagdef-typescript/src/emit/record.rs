use swagdef_codegen::TypeMapper;
use swagdef_schema::{Properties, SchemaKind, SchemaNode};

use super::{EmissionContext, describe, emit_enum, resolve_type};
use crate::{
    TypeScriptTypeMapper,
    declaration::{RecordDeclaration, RecordMember},
    naming::normalize_key,
};

/// Emit the declaration for the top-level definition `name`.
///
/// An enum definition becomes an enum. Everything else becomes a record,
/// placed before any enums its members hoist.
pub fn emit_declaration(ctx: &mut EmissionContext, name: &str, definition: &SchemaNode) {
    if definition.is_enum() {
        emit_enum(ctx, name, definition);
        return;
    }

    tracing::debug!(name, kind = definition.kind_name(), "emitting record");
    let index = ctx.push_record(RecordDeclaration::new(name, describe(definition)));

    let members = match property_source(name, definition) {
        Some(properties) => properties
            .iter()
            .map(|(key, property)| emit_member(ctx, name, key, property))
            .collect(),
        None => match definition.items() {
            Some(items) => vec![emit_member(ctx, name, "items", items)],
            None => Vec::new(),
        },
    };

    ctx.set_members(index, members);
}

/// The properties a record is built from.
///
/// For `allOf`, only the `properties` of the second part are used:
/// compositions are expected to be `[Base, Extension]`.
fn property_source<'a>(name: &str, definition: &'a SchemaNode) -> Option<&'a Properties> {
    match &definition.kind {
        SchemaKind::Composed(parts) => {
            if parts.len() < 2 {
                tracing::warn!(
                    name,
                    parts = parts.len(),
                    "allOf needs a base and an extension, emitting an empty record"
                );
            }
            parts.get(1).and_then(SchemaNode::properties)
        }
        SchemaKind::OpenMap(properties) | SchemaKind::Structured(properties) => Some(properties),
        _ => None,
    }
}

fn emit_member(
    ctx: &mut EmissionContext,
    definition_name: &str,
    key: &str,
    property: &SchemaNode,
) -> RecordMember {
    let key = normalize_key(key);

    let ty = if property.is_enum() {
        let enum_name = format!("{definition_name}{key}");
        emit_enum(ctx, &enum_name, property);
        enum_name
    } else {
        let ty = resolve_type(ctx, definition_name, &key, property);
        TypeScriptTypeMapper.render_type(&ty)
    };

    RecordMember {
        name: key,
        ty,
        doc: describe(property),
        optional: property.nullable,
    }
}
