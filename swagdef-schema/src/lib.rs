//! Swagger/OpenAPI definition parsing for swagdef.
//!
//! Reads the `definitions` of a Swagger 2 document (or `components.schemas`
//! of an OpenAPI 3 document) into a tagged [`SchemaNode`] tree, and loads the
//! optional `swagdef.toml` configuration.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod document;
mod error;
mod node;
mod primitive;
mod raw;

pub use config::{Config, InputConfig, SwagdefToml, TypeScriptConfig, parse_config};
pub use document::{SchemaDocument, parse_document};
pub use error::{Error, Result, SourceContext};
pub use node::{EnumValue, Properties, SchemaKind, SchemaNode, bare_reference_name};
pub use primitive::PrimitiveKind;
