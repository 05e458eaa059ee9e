//! Validation of environment variables against a [`Schema`].
//!
//! One synchronous pass in schema order. The first failing field aborts the
//! whole pass; a partial result is never returned.

mod number;
mod source;

pub use source::{EnvSource, ProcessEnv};

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};
use crate::model::{BaseType, TypeTag, Value};
use crate::result::EnvResult;
use crate::schema::Schema;
use crate::telemetry::validate::{record_outcome, start_validate_span};

// ASCII-only scheme; the first character after the colon must not be a
// line terminator.
static URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+\-.]*:[^\n\r\x{2028}\x{2029}]").expect("URI pattern is valid")
});

/// Validate the process environment against `schema`.
///
/// Reads the environment at call time; nothing is cached.
pub fn validate_env(schema: &Schema) -> Result<EnvResult> {
    validate_env_from(schema, &ProcessEnv)
}

/// Validate the process environment and deserialize the result into `T`.
pub fn validate_env_into<T: DeserializeOwned>(schema: &Schema) -> Result<T> {
    validate_env(schema)?.deserialize()
}

/// Validate an explicit source against `schema`.
///
/// ```
/// use std::collections::HashMap;
/// use envschema_rs::{BaseType, Schema, validate_env_from};
///
/// let schema = Schema::new().field("PORT", BaseType::Port);
/// let source = HashMap::from([("PORT", "8080")]);
/// let env = validate_env_from(&schema, &source).unwrap();
/// assert_eq!(env.port("PORT"), Some(8080));
/// ```
pub fn validate_env_from<E: EnvSource + ?Sized>(schema: &Schema, source: &E) -> Result<EnvResult> {
    let span = start_validate_span(schema.len());
    let _entered = span.enter();

    let outcome = run(schema, source);
    record_outcome(&span, &outcome);
    outcome
}

fn run<E: EnvSource + ?Sized>(schema: &Schema, source: &E) -> Result<EnvResult> {
    let mut result = EnvResult::with_capacity(schema.len());

    for (key, rule) in schema.iter() {
        let tag = rule.tag();
        tracing::debug!(key, kind = tag.kind(), "validating field");

        let raw = source.var(key).filter(|value| !value.is_empty());
        let value = match raw {
            Some(raw) => coerce(key, tag, raw)?,
            None => match rule.default_value() {
                Some(default) => {
                    tracing::debug!(key, "using default");
                    default.clone()
                }
                None => return Err(Error::MissingVar { key: key.to_string() }),
            },
        };
        result.push(key.to_string(), value);
    }

    Ok(result)
}

fn coerce(key: &str, tag: &TypeTag, raw: String) -> Result<Value> {
    match tag {
        TypeTag::Base(BaseType::String) => Ok(Value::String(raw)),
        TypeTag::Base(BaseType::Number) => match number::parse_number(&raw) {
            Some(n) => Ok(Value::Number(n)),
            None => Err(Error::NotANumber {
                key: key.to_string(),
                value: raw,
            }),
        },
        TypeTag::Base(BaseType::Boolean) => match raw.as_str() {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Err(Error::NotABoolean {
                key: key.to_string(),
                value: raw,
            }),
        },
        TypeTag::Base(BaseType::Url) => match Url::parse(&raw) {
            Ok(url) => Ok(Value::String(url.to_string())),
            Err(_) => Err(Error::InvalidUrl {
                key: key.to_string(),
                value: raw,
            }),
        },
        TypeTag::Base(BaseType::Uri) => {
            if URI.is_match(&raw) {
                Ok(Value::String(raw))
            } else {
                Err(Error::InvalidUri {
                    key: key.to_string(),
                    value: raw,
                })
            }
        }
        TypeTag::Base(BaseType::Port) => match number::parse_number(&raw) {
            Some(n) if n.fract() == 0.0 && (0.0..=65535.0).contains(&n) => Ok(Value::Number(n)),
            _ => Err(Error::InvalidPort {
                key: key.to_string(),
                value: raw,
            }),
        },
        TypeTag::Enum(allowed) if allowed.is_empty() => Err(Error::InvalidSchemaType {
            key: key.to_string(),
        }),
        TypeTag::Enum(allowed) => {
            if allowed.iter().any(|candidate| *candidate == raw) {
                Ok(Value::String(raw))
            } else {
                Err(Error::NotAllowed {
                    key: key.to_string(),
                    value: raw,
                    allowed: allowed.clone(),
                })
            }
        }
    }
}
