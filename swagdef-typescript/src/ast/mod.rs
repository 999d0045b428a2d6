//! TypeScript AST builders for the declarations swagdef emits.
//!
//! These render through [`swagdef_codegen::CodeBuilder`] via the
//! [`swagdef_codegen::Renderable`] trait.

mod enums;
mod interface;

pub use enums::{Enum, EnumMember};
pub use interface::{Interface, InterfaceField};
