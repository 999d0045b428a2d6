//! Schema-to-declaration emitters.
//!
//! [`emit_declaration`] is the entry point, called once per top-level
//! definition. It resolves member types with [`resolve_type`], which recurses
//! into arrays and inline objects and hoists any enums it meets through
//! [`emit_enum`]. All of them write into one [`EmissionContext`], owned by the
//! caller for the length of a run.

mod context;
mod describe;
mod enums;
mod record;
mod resolve;

pub use context::EmissionContext;
pub use describe::describe;
pub use enums::emit_enum;
pub use record::emit_declaration;
pub use resolve::resolve_type;
