//! Language-agnostic type expressions.
//!
//! Resolvers build a [`TypeRef`] tree; a [`TypeMapper`] renders it in the
//! target language's syntax.

use swagdef_schema::PrimitiveKind;

/// A resolved type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A schema primitive.
    Primitive(PrimitiveKind),
    /// A named declaration (a referenced definition or a hoisted enum).
    Named(String),
    /// An array of the inner type.
    Array(Box<TypeRef>),
    /// An anonymous structural type spelled out in place.
    Object(Vec<(String, TypeRef)>),
}

impl TypeRef {
    /// Create a primitive type reference.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }

    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create an array type reference.
    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Create an inline object type.
    pub fn object(members: impl IntoIterator<Item = (String, TypeRef)>) -> Self {
        Self::Object(members.into_iter().collect())
    }
}

/// Trait for rendering type expressions in a target language.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a schema primitive. Must not fail for any kind.
    fn map_primitive(&self, kind: PrimitiveKind) -> &'static str;

    /// Map an array of an already rendered element type.
    fn map_array(&self, inner: &str) -> String;

    /// Map an inline object from already rendered member types.
    fn map_object(&self, members: &[(String, String)]) -> String;

    /// Render a complete TypeRef to a string.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(kind) => self.map_primitive(*kind).to_string(),
            TypeRef::Named(name) => name.clone(),
            TypeRef::Array(inner) => self.map_array(&self.render_type(inner)),
            TypeRef::Object(members) => {
                let rendered: Vec<(String, String)> = members
                    .iter()
                    .map(|(name, ty)| (name.clone(), self.render_type(ty)))
                    .collect();
                self.map_object(&rendered)
            }
        }
    }
}
