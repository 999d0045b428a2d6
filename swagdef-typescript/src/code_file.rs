//! CodeFile abstraction for writing declarations out as one TypeScript file.

use swagdef_codegen::{CodeBuilder, CodeFragment, Indent};
use swagdef_schema::TypeScriptConfig;

use crate::declaration::Declaration;

/// How an [`EmissionContext`](crate::EmissionContext) is turned into text.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub indent: Indent,
    /// Prefix declarations with `export`.
    pub export: bool,
    /// Comment lines placed at the top of the file.
    pub header: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: Indent::TYPESCRIPT,
            export: true,
            header: None,
        }
    }
}

impl From<&TypeScriptConfig> for RenderOptions {
    fn from(config: &TypeScriptConfig) -> Self {
        Self {
            indent: Indent::from_width(config.indent),
            export: config.export,
            header: config.header.clone(),
        }
    }
}

/// A structured representation of a TypeScript file.
///
/// An optional header comment, then the declarations in order with a blank
/// line between each.
///
/// # Example
///
/// ```ignore
/// let source = CodeFile::new()
///     .header(Some("Generated by swagdef".into()))
///     .declarations(ctx.declarations())
///     .render();
/// ```
#[derive(Debug, Clone)]
pub struct CodeFile {
    header: Option<String>,
    body: Vec<Vec<CodeFragment>>,
    exported: bool,
}

impl Default for CodeFile {
    fn default() -> Self {
        Self {
            header: None,
            body: Vec::new(),
            exported: true,
        }
    }
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: Option<String>) -> Self {
        self.header = header;
        self
    }

    /// Whether declarations added after this call are exported.
    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Add one declaration.
    pub fn declaration(mut self, declaration: &Declaration) -> Self {
        self.body.push(declaration.to_fragments(self.exported));
        self
    }

    /// Add declarations from an iterator.
    pub fn declarations<'a>(self, declarations: impl IntoIterator<Item = &'a Declaration>) -> Self {
        declarations
            .into_iter()
            .fold(self, |file, declaration| file.declaration(declaration))
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        if let Some(header) = &self.header {
            for line in header.lines() {
                if line.is_empty() {
                    builder.push_line("//");
                } else {
                    builder.push_line(&format!("// {}", line));
                }
            }
            if !self.body.is_empty() {
                builder.push_blank();
            }
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.body.is_empty()
    }
}
