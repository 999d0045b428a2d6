use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for swagdef-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the source content and filename so error factories don't need
/// both passed around separately.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_column_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a config error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an error for a document without any definitions object.
    pub fn missing_definitions(&self) -> Box<Error> {
        Box::new(Error::MissingDefinitions {
            src: self.named_source(),
        })
    }
}

/// Convert a 1-based line/column pair as reported by serde_json into a byte offset.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src.split_inclusive('\n').take(line - 1).map(str::len).sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help(
        "pass the schema document with --input or set [input] path in swagdef.toml"
    ))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema document")]
    #[diagnostic(code(swagdef::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse swagdef.toml")]
    #[diagnostic(code(swagdef::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid configuration")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("schema document has no definitions")]
    #[diagnostic(
        code(swagdef::missing_definitions),
        help(
            "expected a top-level `definitions` object (Swagger 2) or `components.schemas` (OpenAPI 3)"
        )
    )]
    MissingDefinitions {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("unknown definition '{name}'")]
    #[diagnostic(
        code(swagdef::unknown_definition),
        help("run 'swagdef check' to list the definitions in the document")
    )]
    UnknownDefinition { name: String },
}

impl Error {
    /// Create an unknown definition error
    pub fn unknown_definition(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownDefinition { name: name.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column_offset() {
        let src = "{\n  \"a\": 1,\n}";
        assert_eq!(line_column_offset(src, 1, 1), Some(0));
        assert_eq!(line_column_offset(src, 2, 3), Some(4));
        assert_eq!(line_column_offset(src, 0, 0), None);
    }

    #[test]
    fn test_offset_clamped_to_source() {
        assert_eq!(line_column_offset("{}", 9, 9), Some(2));
    }

    #[test]
    fn test_parse_error_has_span() {
        let ctx = SourceContext::new("{\n  oops\n}", "swagger.json");
        let source = serde_json::from_str::<serde_json::Value>(ctx.src()).unwrap_err();
        let err = ctx.parse_error(source);
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
