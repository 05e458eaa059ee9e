//! Schema authoring and TOML loading.

use std::collections::HashMap;
use std::io::Write as _;

use envschema_rs::{BaseType, Error, FieldRule, Schema, TypeTag, Value, define_env};

#[test]
fn define_env_is_identity() {
    let schema = Schema::new()
        .field("A", BaseType::Url)
        .field("B", TypeTag::one_of(["x", "y"]));
    assert_eq!(define_env(schema.clone()), schema);
}

#[test]
fn redeclaring_a_field_replaces_in_place() {
    let mut schema = Schema::new()
        .field("A", BaseType::String)
        .field("B", BaseType::Number);
    let old = schema.insert("A", BaseType::Port);

    assert_eq!(old, Some(FieldRule::Simple(TypeTag::Base(BaseType::String))));
    assert_eq!(schema.len(), 2);
    assert_eq!(schema.iter().map(|(name, _)| name).collect::<Vec<_>>(), ["A", "B"]);
    assert_eq!(schema.get("A").unwrap().tag(), &TypeTag::Base(BaseType::Port));
}

#[test]
fn collects_from_iterator() {
    let schema: Schema = [("HOST", BaseType::String), ("PORT", BaseType::Port)]
        .into_iter()
        .collect();
    assert_eq!(schema.len(), 2);
    assert!(schema.get("PORT").unwrap().default_value().is_none());
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

const SCHEMA: &str = r#"
PORT = "port"
NAME = { type = "string", default = "svc" }
MODE = ["dev", "prod"]
TIMEOUT = { type = "number", default = 30 }
RATIO = { type = "number", default = 0.5 }
VERBOSE = { type = "boolean", default = false }
ENDPOINT = { type = "url" }
LEVEL = { type = ["debug", "info"], default = "info" }
"#;

#[test]
fn toml_shapes_map_to_rules() {
    let schema = Schema::from_toml_str(SCHEMA).unwrap();

    assert_eq!(
        schema.get("PORT"),
        Some(&FieldRule::Simple(TypeTag::Base(BaseType::Port)))
    );
    assert_eq!(
        schema.get("NAME"),
        Some(&FieldRule::with_default(BaseType::String, "svc"))
    );
    assert_eq!(
        schema.get("MODE"),
        Some(&FieldRule::Simple(TypeTag::one_of(["dev", "prod"])))
    );
    assert_eq!(
        schema.get("TIMEOUT").unwrap().default_value(),
        Some(&Value::Number(30.0))
    );
    assert_eq!(
        schema.get("RATIO").unwrap().default_value(),
        Some(&Value::Number(0.5))
    );
    assert_eq!(
        schema.get("VERBOSE").unwrap().default_value(),
        Some(&Value::Boolean(false))
    );
    assert_eq!(
        schema.get("ENDPOINT"),
        Some(&FieldRule::Simple(TypeTag::Base(BaseType::Url)))
    );
    assert_eq!(
        schema.get("LEVEL"),
        Some(&FieldRule::with_default(TypeTag::one_of(["debug", "info"]), "info"))
    );
}

#[test]
fn toml_keeps_document_order() {
    let schema = Schema::from_toml_str(SCHEMA).unwrap();
    let names: Vec<_> = schema.iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        ["PORT", "NAME", "MODE", "TIMEOUT", "RATIO", "VERBOSE", "ENDPOINT", "LEVEL"]
    );
}

#[test]
fn toml_schema_validates_end_to_end() {
    let schema = Schema::from_toml_str(SCHEMA).unwrap();
    let source = HashMap::from([
        ("PORT", "8080"),
        ("MODE", "prod"),
        ("ENDPOINT", "https://api.example.com"),
    ]);

    let env = schema.validate(&source).unwrap();
    assert_eq!(env.port("PORT"), Some(8080));
    assert_eq!(env.string("NAME"), Some("svc"));
    assert_eq!(env.number("TIMEOUT"), Some(30.0));
    assert_eq!(env.boolean("VERBOSE"), Some(false));
    assert_eq!(env.string("ENDPOINT"), Some("https://api.example.com/"));
    assert_eq!(env.string("LEVEL"), Some("info"));
}

#[test]
fn unknown_type_name_is_invalid_schema_type() {
    let err = Schema::from_toml_str(r#"RATE = "float""#).unwrap_err();
    assert!(matches!(err, Error::InvalidSchemaType { ref key } if key == "RATE"));
}

#[test]
fn non_string_shapes_are_invalid_schema_type() {
    for doc in [
        "A = 5",
        "A = true",
        "A = [1, 2]",
        "A = { default = \"x\" }",
        "A = { type = 5 }",
        "A = { type = { nested = \"string\" } }",
    ] {
        let err = Schema::from_toml_str(doc).unwrap_err();
        assert!(
            matches!(err, Error::InvalidSchemaType { .. }),
            "{doc} should be rejected, got {err}"
        );
    }
}

#[test]
fn unsupported_default_shape_is_rejected() {
    let err = Schema::from_toml_str(r#"A = { type = "string", default = ["x"] }"#).unwrap_err();
    assert!(matches!(err, Error::InvalidDefault { ref key, .. } if key == "A"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Schema::from_toml_str("A = ").unwrap_err();
    assert!(matches!(err, Error::SchemaParse(_)));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "HOST = \"string\"\nPORT = {{ type = \"port\", default = 80 }}").unwrap();

    let schema = Schema::from_toml_file(file.path()).unwrap();
    assert_eq!(schema.len(), 2);
    assert_eq!(
        schema.get("PORT").unwrap().default_value(),
        Some(&Value::Number(80.0))
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Schema::from_toml_file(std::path::Path::new("/nonexistent/env.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
