//! TypeScript declaration generator.

use swagdef_schema::{Result, SchemaDocument};

use crate::{
    RenderOptions,
    emit::{EmissionContext, emit_declaration},
};

/// Generates TypeScript declarations for the definitions of a document.
pub struct Generator<'a> {
    document: &'a SchemaDocument,
    selection: Vec<String>,
    options: RenderOptions,
}

impl<'a> Generator<'a> {
    pub fn new(document: &'a SchemaDocument) -> Self {
        Self {
            document,
            selection: Vec::new(),
            options: RenderOptions::default(),
        }
    }

    /// Only generate the named definitions. They are still visited in
    /// document order. An empty selection means every definition.
    pub fn select(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.selection = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the declaration emitter over the selected definitions.
    ///
    /// Fails only when a selected name is not in the document.
    pub fn emit(&self) -> Result<EmissionContext> {
        let definitions = self.document.select(&self.selection)?;

        let mut ctx = EmissionContext::new();
        for (name, definition) in definitions {
            emit_declaration(&mut ctx, name, definition);
        }

        tracing::debug!(
            enums = ctx.enum_count(),
            records = ctx.record_count(),
            "generation finished"
        );
        Ok(ctx)
    }

    /// Generate and render TypeScript source.
    pub fn render(&self) -> Result<String> {
        Ok(self.emit()?.render(&self.options))
    }
}
