//! Error types for envschema-rs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required environment variable: {key}")]
    MissingVar { key: String },

    #[error("Expected environment variable {key} to be a number, but got \"{value}\"")]
    NotANumber { key: String, value: String },

    #[error("Expected environment variable {key} to be boolean (true/false), but got \"{value}\"")]
    NotABoolean { key: String, value: String },

    #[error("Expected environment variable {key} to be a valid URL, but got \"{value}\"")]
    InvalidUrl { key: String, value: String },

    #[error("Expected environment variable {key} to be a valid URI, but got \"{value}\"")]
    InvalidUri { key: String, value: String },

    #[error(
        "Expected environment variable {key} to be a valid port number (0-65535), but got \"{value}\""
    )]
    InvalidPort { key: String, value: String },

    #[error(
        "Expected environment variable {key} to be one of [{}], but got \"{value}\"",
        .allowed.join(", ")
    )]
    NotAllowed {
        key: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Invalid schema type for {key}")]
    InvalidSchemaType { key: String },

    #[error("Invalid default value for {key}: {reason}")]
    InvalidDefault { key: String, reason: String },

    #[error("schema parse error: {0}")]
    SchemaParse(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot deserialize validated environment: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl Error {
    /// The environment variable this error is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::MissingVar { key }
            | Error::NotANumber { key, .. }
            | Error::NotABoolean { key, .. }
            | Error::InvalidUrl { key, .. }
            | Error::InvalidUri { key, .. }
            | Error::InvalidPort { key, .. }
            | Error::NotAllowed { key, .. }
            | Error::InvalidSchemaType { key }
            | Error::InvalidDefault { key, .. } => Some(key),
            Error::SchemaParse(_) | Error::Io(_) | Error::Deserialize(_) => None,
        }
    }

    /// Stable label for the failure cause. Never contains the raw value.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MissingVar { .. } => "missing",
            Error::NotANumber { .. } => "not_a_number",
            Error::NotABoolean { .. } => "not_a_boolean",
            Error::InvalidUrl { .. } => "invalid_url",
            Error::InvalidUri { .. } => "invalid_uri",
            Error::InvalidPort { .. } => "invalid_port",
            Error::NotAllowed { .. } => "not_allowed",
            Error::InvalidSchemaType { .. } => "invalid_schema_type",
            Error::InvalidDefault { .. } => "invalid_default",
            Error::SchemaParse(_) => "schema_parse",
            Error::Io(_) => "io",
            Error::Deserialize(_) => "deserialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
