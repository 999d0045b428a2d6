//! Check operation - document summary.

use std::path::Path;

use swagdef_schema::{Result, SchemaDocument, SchemaKind, SchemaNode};
use swagdef_codegen::TypeMapper;
use swagdef_typescript::{Generator, TypeScriptTypeMapper};

use crate::reports::CheckReport;

/// Summarize `document` and the declarations it would produce.
pub fn check(document: &SchemaDocument, input_path: &Path) -> Result<CheckReport> {
    let mut kinds: Vec<(&'static str, usize)> = Vec::new();
    let mut warnings = Vec::new();

    for (name, definition) in document.definitions() {
        let kind = definition.kind_name();
        match kinds.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, count)) => *count += 1,
            None => kinds.push((kind, 1)),
        }
        warnings.extend(lint(name, definition));
    }

    let ctx = Generator::new(document).emit()?;

    Ok(CheckReport {
        input_path: input_path.to_path_buf(),
        language: TypeScriptTypeMapper.language(),
        definitions: document.len(),
        kinds,
        interfaces: ctx.record_count(),
        enums: ctx.enum_count(),
        warnings,
    })
}

/// Definitions that generate, but probably not into what the author meant.
fn lint(name: &str, definition: &SchemaNode) -> Vec<String> {
    let mut warnings = Vec::new();
    match &definition.kind {
        SchemaKind::Composed(parts) if parts.len() < 2 => warnings.push(format!(
            "{}: allOf has {} part(s), expected a base and an extension",
            name,
            parts.len()
        )),
        SchemaKind::Composed(parts) if parts.len() > 2 => warnings.push(format!(
            "{}: allOf has {} parts, only the second one is used",
            name,
            parts.len()
        )),
        SchemaKind::Enum(values) if values.is_empty() => {
            warnings.push(format!("{}: enum has no values", name))
        }
        _ => {}
    }
    warnings
}
