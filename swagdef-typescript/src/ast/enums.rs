//! TypeScript enum builder.

use swagdef_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::naming::member_name;

/// A member of a TypeScript enum with its initializer.
#[derive(Debug, Clone)]
pub struct EnumMember {
    pub name: String,
    /// Already rendered literal, e.g. `"red"` or `404`.
    pub value: String,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Builder for TypeScript enums.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    members: Vec<EnumMember>,
    exported: bool,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc));
        }

        if self.members.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "{}enum {} {{}}",
                export, self.name
            )));
        } else {
            let body = self
                .members
                .iter()
                .map(|m| CodeFragment::Line(format!("{} = {},", member_name(&m.name), m.value)))
                .collect();
            fragments.push(CodeFragment::Block {
                header: format!("{}enum {} {{", export, self.name),
                body,
                close: Some("}".to_string()),
            });
        }

        fragments
    }
}
