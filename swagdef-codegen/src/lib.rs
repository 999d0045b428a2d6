//! Shared code generation utilities for swagdef.
//!
//! This crate provides the language-agnostic building blocks used by
//! language backends (e.g., `swagdef-typescript`):
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for AST nodes that render to fragments
//! - [`Indent`] - Indentation configuration
//! - [`TypeRef`], [`TypeMapper`] - Type expressions and their rendering

mod code_builder;
mod indent;
mod renderable;
mod types;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use types::{TypeMapper, TypeRef};
