//! Snapshot tests for TypeScript declaration generation.
//!
//! These tests verify that the generated TypeScript matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use swagdef_codegen::Indent;
use swagdef_schema::SchemaDocument;
use swagdef_typescript::{Generator, RenderOptions};

fn generate(document: &str, options: RenderOptions) -> String {
    let document = SchemaDocument::from_str(document).expect("Failed to parse document");
    Generator::new(&document)
        .options(options)
        .render()
        .expect("Generation failed")
}

#[test]
fn test_petstore_definitions() {
    let source = generate(
        r##"{
            "swagger": "2.0",
            "definitions": {
                "Category": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" }
                    }
                },
                "Pet": {
                    "type": "object",
                    "description": "A pet for sale",
                    "required": ["name", "photoUrls"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64", "example": 10 },
                        "name": { "type": "string", "example": "doggie" },
                        "category": { "$ref": "#/definitions/Category" },
                        "photoUrls": { "type": "array", "items": { "type": "string" } },
                        "tags": {
                            "type": "array",
                            "x-nullable": true,
                            "items": { "$ref": "#/definitions/Tag" }
                        },
                        "status": {
                            "type": "string",
                            "description": "pet status in the store",
                            "enum": ["available", "pending", "sold"]
                        }
                    }
                },
                "Tag": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" }
                    }
                }
            }
        }"##,
        RenderOptions::default(),
    );

    insta::assert_snapshot!(source, @r#"
export interface Category {
  id: number;
  name: string;
}

/** A pet for sale */
export interface Pet {
  /**
   *
   * Example: 10
   */
  id: number;
  /**
   *
   * Example: "doggie"
   */
  name: string;
  category: Category;
  photoUrls: Array<string>;
  tags?: Array<Tag>;
  /** pet status in the store */
  status: Petstatus;
}

/** pet status in the store */
export enum Petstatus {
  available = "available",
  pending = "pending",
  sold = "sold",
}

export interface Tag {
  id: number;
  name: string;
}
"#);
}

#[test]
fn test_openapi_components() {
    let source = generate(
        r##"{
            "openapi": "3.0.0",
            "components": {
                "schemas": {
                    "Base": {
                        "type": "object",
                        "properties": { "id": { "type": "string" } }
                    },
                    "Dog": {
                        "allOf": [
                            { "$ref": "#/components/schemas/Base" },
                            {
                                "type": "object",
                                "properties": {
                                    "bark": { "type": "boolean" },
                                    "x-breed": { "type": "string", "enum": ["lab", "pug"] }
                                }
                            }
                        ]
                    },
                    "Labels": {
                        "type": "object",
                        "additionalProperties": {
                            "com.example.team": { "type": "string" }
                        }
                    },
                    "Owner": {
                        "type": "object",
                        "properties": {
                            "address": {
                                "type": "object",
                                "properties": {
                                    "city": { "type": "string" },
                                    "kind": { "type": "string", "enum": ["home", "work"] }
                                }
                            }
                        }
                    },
                    "Level": {
                        "type": "integer",
                        "description": "Log level",
                        "enum": [1, 2, 3]
                    },
                    "Tags": {
                        "type": "array",
                        "items": { "type": "string" }
                    }
                }
            }
        }"##,
        RenderOptions {
            indent: Indent::FOUR,
            export: false,
            header: Some("Generated by swagdef".into()),
        },
    );

    insta::assert_snapshot!(source, @r#"
// Generated by swagdef

interface Base {
    id: string;
}

interface Dog {
    bark: boolean;
    x_breed: Dogx_breed;
}

enum Dogx_breed {
    lab = "lab",
    pug = "pug",
}

interface Labels {
    com_example_team: string;
}

interface Owner {
    address: { city: string, kind: Ownerkind };
}

enum Ownerkind {
    home = "home",
    work = "work",
}

/** Log level */
enum Level {
    _1 = 1,
    _2 = 2,
    _3 = 3,
}

interface Tags {
    items: string;
}
"#);
}

#[test]
fn test_object_example_is_fenced() {
    let source = generate(
        r#"{
            "definitions": {
                "Point": {
                    "type": "object",
                    "description": "A point",
                    "example": { "x": 1, "y": 2 },
                    "properties": {
                        "x": { "type": "integer" },
                        "y": { "type": "integer" }
                    }
                }
            }
        }"#,
        RenderOptions::default(),
    );

    let expected = [
        "/**",
        " * A point",
        " *",
        " * Example:",
        " * ```json",
        " * {",
        " * \t\"x\": 1,",
        " * \t\"y\": 2",
        " * }",
        " * ```",
        " */",
        "export interface Point {",
    ]
    .join("\n");
    assert!(source.starts_with(&expected), "unexpected output:\n{source}");
}

#[test]
fn test_selected_definitions_only() {
    let document = SchemaDocument::from_str(
        r##"{
            "definitions": {
                "A": { "type": "object", "properties": { "b": { "$ref": "#/definitions/B" } } },
                "B": { "type": "object" }
            }
        }"##,
    )
    .expect("Failed to parse document");

    let source = Generator::new(&document)
        .select(["A"])
        .render()
        .expect("Generation failed");

    insta::assert_snapshot!(source, @r"
export interface A {
  b: B;
}
");
}
