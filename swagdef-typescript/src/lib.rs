//! TypeScript declaration generator for swagdef.
//!
//! Turns the definitions of a Swagger/OpenAPI document into TypeScript
//! interfaces and enums.
//!
//! # Usage
//!
//! ```ignore
//! use swagdef_schema::SchemaDocument;
//! use swagdef_typescript::Generator;
//!
//! let document = SchemaDocument::from_file("swagger.json")?;
//! let source = Generator::new(&document).render()?;
//! ```
//!
//! For finer control, drive the emitters in [`emit`] directly with your own
//! [`EmissionContext`].
//!
//! # Output
//!
//! - an object definition becomes an `interface`, with `x-nullable`
//!   properties marked optional;
//! - an `enum` definition becomes an `enum`, and enums nested in properties
//!   are hoisted to top-level enums named after the definition and property;
//! - descriptions and examples become JSDoc comments.

mod code_file;
mod declaration;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;
pub mod emit;

pub use code_file::{CodeFile, RenderOptions};
pub use declaration::{
    Declaration, EnumDeclaration, EnumMemberDeclaration, RecordDeclaration, RecordMember,
};
pub use emit::EmissionContext;
pub use generator::Generator;
pub use type_mapper::TypeScriptTypeMapper;
