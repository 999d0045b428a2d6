use swagdef_schema::SchemaNode;

use super::EmissionContext;
use crate::{
    declaration::{EnumDeclaration, EnumMemberDeclaration},
    naming::enum_member_name,
};

/// Emit an enum declaration for `node` under `name`.
///
/// Does nothing when an enum of that name already exists in `ctx`, even if
/// its values differ.
pub fn emit_enum(ctx: &mut EmissionContext, name: &str, node: &SchemaNode) {
    if ctx.has_enum(name) {
        tracing::trace!(name, "enum already emitted");
        return;
    }

    let members: Vec<EnumMemberDeclaration> = node
        .enum_values()
        .unwrap_or_default()
        .iter()
        .map(|value| EnumMemberDeclaration {
            name: enum_member_name(value),
            value: value.clone(),
        })
        .collect();

    tracing::debug!(name, members = members.len(), "emitting enum");
    ctx.push_enum(EnumDeclaration {
        name: name.to_string(),
        doc: node.description.clone(),
        members,
    });
}
