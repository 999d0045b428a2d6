//! Emitted declarations.
//!
//! This is what a generation run hands to its caller: an ordered list of
//! enums and records, independent of how they are finally written out.

use swagdef_codegen::{CodeFragment, Renderable};
use swagdef_schema::EnumValue;

use crate::{
    ast::{Enum, EnumMember, Interface, InterfaceField},
    naming::quote,
};

/// A single emitted declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Enum(EnumDeclaration),
    Record(RecordDeclaration),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Enum(e) => &e.name,
            Declaration::Record(r) => &r.name,
        }
    }

    pub fn doc(&self) -> Option<&str> {
        match self {
            Declaration::Enum(e) => e.doc.as_deref(),
            Declaration::Record(r) => r.doc.as_deref(),
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDeclaration> {
        match self {
            Declaration::Enum(e) => Some(e),
            Declaration::Record(_) => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordDeclaration> {
        match self {
            Declaration::Record(r) => Some(r),
            Declaration::Enum(_) => None,
        }
    }

    /// Render to fragments, optionally with the `export` keyword.
    pub fn to_fragments(&self, exported: bool) -> Vec<CodeFragment> {
        match self {
            Declaration::Enum(e) => {
                let node = e.to_ast();
                (if exported { node } else { node.private() }).to_fragments()
            }
            Declaration::Record(r) => {
                let node = r.to_ast();
                (if exported { node } else { node.private() }).to_fragments()
            }
        }
    }
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDeclaration {
    pub name: String,
    pub doc: Option<String>,
    pub members: Vec<EnumMemberDeclaration>,
}

/// One enum member: sanitized name plus the original literal.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMemberDeclaration {
    pub name: String,
    pub value: EnumValue,
}

impl EnumDeclaration {
    pub fn to_ast(&self) -> Enum {
        let node = self
            .members
            .iter()
            .fold(Enum::new(&self.name), |node, member| {
                node.member(EnumMember::new(&member.name, literal(&member.value)))
            });
        match &self.doc {
            Some(doc) => node.doc(doc),
            None => node,
        }
    }
}

/// Render an enum initializer. TypeScript enums only take strings and
/// numbers, so booleans become their string form.
fn literal(value: &EnumValue) -> String {
    match value {
        EnumValue::String(s) => quote(s),
        EnumValue::Number(n) => n.to_string(),
        EnumValue::Boolean(b) => quote(&b.to_string()),
    }
}

/// A record (interface) declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDeclaration {
    pub name: String,
    pub doc: Option<String>,
    pub members: Vec<RecordMember>,
}

/// One record member.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordMember {
    pub name: String,
    /// Rendered type expression.
    pub ty: String,
    pub doc: Option<String>,
    pub optional: bool,
}

impl RecordDeclaration {
    pub fn new(name: impl Into<String>, doc: Option<String>) -> Self {
        Self {
            name: name.into(),
            doc,
            members: Vec::new(),
        }
    }

    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<&RecordMember> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn to_ast(&self) -> Interface {
        let node = self.members.iter().fold(Interface::new(&self.name), |node, member| {
            let mut field = InterfaceField::new(&member.name, &member.ty);
            if let Some(doc) = &member.doc {
                field = field.doc(doc);
            }
            if member.optional {
                field = field.optional();
            }
            node.field_with(field)
        });
        match &self.doc {
            Some(doc) => node.doc(doc),
            None => node,
        }
    }
}
