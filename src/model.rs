//! Core data model.
//!
//! A schema field has a type tag (what shape the raw string must have) and
//! optionally a default used when the variable is absent or empty.

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Type tags
// ---------------------------------------------------------------------------

/// The fixed base kinds a variable can be declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// Passed through unchanged.
    String,
    /// Numeric literal, stored as `f64`.
    Number,
    /// Exactly `true` or `false`.
    Boolean,
    /// Absolute URL, stored in canonical form.
    Url,
    /// `scheme:rest`, stored unchanged.
    Uri,
    /// Integer in `0..=65535`.
    Port,
}

impl BaseType {
    /// Look up a base type by its schema name (`"string"`, `"port"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name {
            "string" => BaseType::String,
            "number" => BaseType::Number,
            "boolean" => BaseType::Boolean,
            "url" => BaseType::Url,
            "uri" => BaseType::Uri,
            "port" => BaseType::Port,
            _ => return None,
        };
        Some(ty)
    }

    pub fn name(self) -> &'static str {
        match self {
            BaseType::String => "string",
            BaseType::Number => "number",
            BaseType::Boolean => "boolean",
            BaseType::Url => "url",
            BaseType::Uri => "uri",
            BaseType::Port => "port",
        }
    }
}

impl std::fmt::Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Declared type of one environment field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    Base(BaseType),
    /// Allowed literals, in declaration order. Must be non-empty.
    Enum(Vec<String>),
}

impl TypeTag {
    /// Enum tag from any list of string-like values.
    pub fn one_of<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeTag::Enum(allowed.into_iter().map(Into::into).collect())
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TypeTag::Base(ty) => ty.name(),
            TypeTag::Enum(_) => "enum",
        }
    }
}

impl From<BaseType> for TypeTag {
    fn from(ty: BaseType) -> Self {
        TypeTag::Base(ty)
    }
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// A type tag, optionally paired with a default.
///
/// The default is used verbatim when the variable is absent or empty. It is
/// not checked against the tag.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    Simple(TypeTag),
    WithDefault(TypeTag, Value),
}

impl FieldRule {
    pub fn with_default(tag: impl Into<TypeTag>, default: impl Into<Value>) -> Self {
        FieldRule::WithDefault(tag.into(), default.into())
    }

    pub fn tag(&self) -> &TypeTag {
        match self {
            FieldRule::Simple(tag) | FieldRule::WithDefault(tag, _) => tag,
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        match self {
            FieldRule::Simple(_) => None,
            FieldRule::WithDefault(_, value) => Some(value),
        }
    }
}

impl From<TypeTag> for FieldRule {
    fn from(tag: TypeTag) -> Self {
        FieldRule::Simple(tag)
    }
}

impl From<BaseType> for FieldRule {
    fn from(ty: BaseType) -> Self {
        FieldRule::Simple(TypeTag::Base(ty))
    }
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A validated (or default) value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// Largest magnitude where every integer is exactly representable in `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            // Integral numbers go out as integers so they land in integer fields.
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Number(_) => serializer.serialize_none(),
        }
    }
}
