//! The accumulating output of one generation run.

use std::collections::HashSet;

use crate::{
    RenderOptions,
    code_file::CodeFile,
    declaration::{Declaration, EnumDeclaration, RecordDeclaration, RecordMember},
};

/// Declarations emitted so far, plus the set of enum names already taken.
///
/// One context per output target. The emitters mutate it; once generation is
/// done the caller renders it or takes the declarations out.
#[derive(Debug, Default)]
pub struct EmissionContext {
    enum_names: HashSet<String>,
    declarations: Vec<Declaration>,
}

impl EmissionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an enum with this name has been emitted.
    pub fn has_enum(&self, name: &str) -> bool {
        self.enum_names.contains(name)
    }

    /// All declarations in emission order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn into_declarations(self) -> Vec<Declaration> {
        self.declarations
    }

    /// Find a declaration by name. Records and enums share the lookup.
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name() == name)
    }

    /// Find an enum declaration by name.
    pub fn get_enum(&self, name: &str) -> Option<&EnumDeclaration> {
        self.declarations
            .iter()
            .filter_map(Declaration::as_enum)
            .find(|e| e.name == name)
    }

    /// Find a record declaration by name.
    pub fn get_record(&self, name: &str) -> Option<&RecordDeclaration> {
        self.declarations
            .iter()
            .filter_map(Declaration::as_record)
            .find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn enum_count(&self) -> usize {
        self.enum_names.len()
    }

    pub fn record_count(&self) -> usize {
        self.declarations.len() - self.enum_names.len()
    }

    /// Render every declaration as a TypeScript source file.
    pub fn render(&self, options: &RenderOptions) -> String {
        let file = CodeFile::new()
            .header(options.header.clone())
            .exported(options.export)
            .declarations(&self.declarations);
        file.render_with_indent(options.indent)
    }

    /// Register an enum. Returns `false` if the name was already taken.
    pub(crate) fn push_enum(&mut self, declaration: EnumDeclaration) -> bool {
        if !self.enum_names.insert(declaration.name.clone()) {
            return false;
        }
        self.declarations.push(Declaration::Enum(declaration));
        true
    }

    /// Append a record and return its position, so members can be filled in
    /// after any enums they hoist have been emitted behind it.
    pub(crate) fn push_record(&mut self, declaration: RecordDeclaration) -> usize {
        self.declarations.push(Declaration::Record(declaration));
        self.declarations.len() - 1
    }

    pub(crate) fn set_members(&mut self, index: usize, members: Vec<RecordMember>) {
        if let Some(Declaration::Record(record)) = self.declarations.get_mut(index) {
            record.members = members;
        }
    }
}
