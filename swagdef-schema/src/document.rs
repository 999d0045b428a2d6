//! Schema document loading.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;

use crate::{
    Error, Result, SchemaNode,
    error::SourceContext,
    node::convert_properties,
    raw::RawDocument,
};

/// The named definitions of a Swagger 2 or OpenAPI 3 document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocument {
    definitions: IndexMap<String, SchemaNode>,
}

impl FromStr for SchemaDocument {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "swagger.json")
    }
}

impl SchemaDocument {
    /// Build a document from already-parsed definitions.
    pub fn from_definitions(definitions: IndexMap<String, SchemaNode>) -> Self {
        Self { definitions }
    }

    /// Parse a schema document from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_document(&content, &path.display().to_string())
    }

    /// Parse a schema document from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_document(content, filename)
    }

    /// All definitions in document order.
    pub fn definitions(&self) -> &IndexMap<String, SchemaNode> {
        &self.definitions
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.definitions.get(name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Select definitions by name, keeping document order.
    ///
    /// An empty selection means every definition.
    pub fn select(&self, names: &[String]) -> Result<Vec<(&str, &SchemaNode)>> {
        if let Some(missing) = names.iter().find(|n| !self.definitions.contains_key(*n)) {
            return Err(Error::unknown_definition(missing.clone()));
        }

        Ok(self
            .definitions
            .iter()
            .filter(|(name, _)| names.is_empty() || names.contains(name))
            .map(|(name, node)| (name.as_str(), node))
            .collect())
    }
}

/// Parse a document from content with the given filename for error reporting.
pub fn parse_document(content: &str, filename: &str) -> Result<SchemaDocument> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawDocument =
        serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    let definitions = raw
        .into_definitions()
        .ok_or_else(|| source_ctx.missing_definitions())?;

    tracing::debug!(filename, count = definitions.len(), "parsed schema document");
    Ok(SchemaDocument::from_definitions(convert_properties(definitions)))
}
