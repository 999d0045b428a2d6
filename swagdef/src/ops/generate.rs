//! Generate operation - render TypeScript for a document.

use swagdef_schema::{Result, SchemaDocument};
use swagdef_typescript::{Generator, RenderOptions};

/// Render the selected definitions of `document`, or all of them when
/// `definitions` is empty.
pub fn generate(
    document: &SchemaDocument,
    definitions: &[String],
    options: RenderOptions,
) -> Result<String> {
    Generator::new(document)
        .select(definitions.iter().cloned())
        .options(options)
        .render()
}

#[cfg(test)]
mod tests {
    use swagdef_schema::Error;

    use super::*;

    const DOCUMENT: &str = r#"{
        "definitions": {
            "A": { "type": "object", "properties": { "x": { "type": "string" } } },
            "B": { "type": "object" }
        }
    }"#;

    #[test]
    fn test_generate_all() {
        let document: SchemaDocument = DOCUMENT.parse().unwrap();
        let source = generate(&document, &[], RenderOptions::default()).unwrap();
        assert_eq!(
            source,
            "export interface A {\n  x: string;\n}\n\nexport interface B {}\n"
        );
    }

    #[test]
    fn test_generate_unknown_definition() {
        let document: SchemaDocument = DOCUMENT.parse().unwrap();
        let err = generate(&document, &["C".to_string()], RenderOptions::default()).unwrap_err();
        assert!(matches!(*err, Error::UnknownDefinition { ref name } if name == "C"));
    }

    #[test]
    fn test_generate_from_config_on_disk() {
        use swagdef_schema::SwagdefToml;

        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("api")).unwrap();
        std::fs::write(dir.path().join("api/swagger.json"), DOCUMENT).unwrap();
        std::fs::write(
            dir.path().join("swagdef.toml"),
            "[input]\npath = \"api/swagger.json\"\n\n[typescript]\nexport = false\n",
        )
        .unwrap();

        let swagdef_toml = SwagdefToml::open(dir.path().join("swagdef.toml")).unwrap();
        let document = SchemaDocument::from_file(swagdef_toml.input_path()).unwrap();
        let options = RenderOptions::from(&swagdef_toml.config().typescript);

        let source = generate(&document, &["B".to_string()], options).unwrap();
        assert_eq!(source, "interface B {}\n");
    }
}
