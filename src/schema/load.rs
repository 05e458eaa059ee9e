//! Schema loading from TOML.
//!
//! ```toml
//! PORT = "port"
//! MODE = ["dev", "staging", "prod"]
//! NAME = { type = "string", default = "svc" }
//! ```
//!
//! Top-level keys keep document order.

use std::path::Path;

use super::Schema;
use crate::error::{Error, Result};
use crate::model::{BaseType, FieldRule, TypeTag, Value};

impl Schema {
    /// Parse a schema from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = content.parse()?;
        let mut schema = Schema::new();
        for (key, raw) in &table {
            let rule = parse_rule(key, raw)?;
            schema.insert(key.clone(), rule);
        }
        tracing::debug!(fields = schema.len(), "schema loaded");
        Ok(schema)
    }

    /// Read and parse a TOML schema file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

fn parse_rule(key: &str, raw: &toml::Value) -> Result<FieldRule> {
    match raw {
        toml::Value::Table(table) => {
            let tag = table
                .get("type")
                .ok_or_else(|| invalid_type(key))
                .and_then(|ty| parse_tag(key, ty))?;
            match table.get("default") {
                Some(default) => Ok(FieldRule::WithDefault(tag, parse_default(key, default)?)),
                None => Ok(FieldRule::Simple(tag)),
            }
        }
        other => Ok(FieldRule::Simple(parse_tag(key, other)?)),
    }
}

fn parse_tag(key: &str, raw: &toml::Value) -> Result<TypeTag> {
    match raw {
        toml::Value::String(name) => BaseType::from_name(name)
            .map(TypeTag::Base)
            .ok_or_else(|| invalid_type(key)),
        toml::Value::Array(items) => {
            let allowed = items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| invalid_type(key))?;
            Ok(TypeTag::Enum(allowed))
        }
        _ => Err(invalid_type(key)),
    }
}

fn parse_default(key: &str, raw: &toml::Value) -> Result<Value> {
    match raw {
        toml::Value::String(s) => Ok(Value::String(s.clone())),
        toml::Value::Integer(n) => Ok(Value::from(*n)),
        toml::Value::Float(n) => Ok(Value::Number(*n)),
        toml::Value::Boolean(b) => Ok(Value::Boolean(*b)),
        other => Err(Error::InvalidDefault {
            key: key.to_string(),
            reason: format!("unsupported {} default", other.type_str()),
        }),
    }
}

fn invalid_type(key: &str) -> Error {
    Error::InvalidSchemaType {
        key: key.to_string(),
    }
}
