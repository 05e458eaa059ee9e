//! # envschema-rs
//!
//! Validates and type-casts environment variables against a declared schema.
//!
//! Fails fast on the first missing or malformed variable, so it belongs at
//! process startup.
//!
//! ```
//! use std::collections::HashMap;
//! use envschema_rs::{BaseType, FieldRule, Schema, TypeTag, define_env, validate_env_from};
//!
//! let schema = define_env(
//!     Schema::new()
//!         .field("PORT", BaseType::Port)
//!         .field("NAME", FieldRule::with_default(BaseType::String, "svc"))
//!         .field("MODE", TypeTag::one_of(["dev", "prod"])),
//! );
//! let source = HashMap::from([("PORT", "8080"), ("MODE", "prod")]);
//!
//! let env = validate_env_from(&schema, &source).unwrap();
//! assert_eq!(env.port("PORT"), Some(8080));
//! assert_eq!(env.string("NAME"), Some("svc"));
//! assert_eq!(env.string("MODE"), Some("prod"));
//! ```

pub mod env;
pub mod error;
pub mod model;
pub mod result;
pub mod schema;
pub mod telemetry;

pub use env::{EnvSource, ProcessEnv, validate_env, validate_env_from, validate_env_into};
pub use error::{Error, Result};
pub use model::{BaseType, FieldRule, TypeTag, Value};
pub use result::EnvResult;
pub use schema::{Schema, define_env};
