//! Schema authoring.
//!
//! A schema is an ordered set of named field rules. Names are unique; adding
//! a field under an existing name replaces its rule without moving it.

mod load;

use crate::env::{self, EnvSource};
use crate::error::Result;
use crate::model::FieldRule;
use crate::result::EnvResult;

/// Ordered mapping of variable name to [`FieldRule`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<(String, FieldRule)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a field.
    ///
    /// ```
    /// use envschema_rs::{BaseType, FieldRule, Schema, TypeTag};
    ///
    /// let schema = Schema::new()
    ///     .field("PORT", BaseType::Port)
    ///     .field("NAME", FieldRule::with_default(BaseType::String, "svc"))
    ///     .field("MODE", TypeTag::one_of(["dev", "prod"]));
    /// assert_eq!(schema.len(), 3);
    /// ```
    pub fn field(mut self, name: impl Into<String>, rule: impl Into<FieldRule>) -> Self {
        self.insert(name, rule);
        self
    }

    /// In-place form of [`Schema::field`]. Returns the replaced rule, if any.
    pub fn insert(&mut self, name: impl Into<String>, rule: impl Into<FieldRule>) -> Option<FieldRule> {
        let name = name.into();
        let rule = rule.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, rule)),
            None => {
                self.fields.push((name, rule));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rule)| rule)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Validate against an explicit source. See [`crate::validate_env_from`].
    pub fn validate<E: EnvSource + ?Sized>(&self, source: &E) -> Result<EnvResult> {
        env::validate_env_from(self, source)
    }
}

impl<N: Into<String>, R: Into<FieldRule>> FromIterator<(N, R)> for Schema {
    fn from_iter<I: IntoIterator<Item = (N, R)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (name, rule) in iter {
            schema.insert(name, rule);
        }
        schema
    }
}

/// Identity. Lets a schema be declared once (e.g. in a `fn` or `LazyLock`)
/// and reads as the counterpart of [`crate::validate_env`].
pub fn define_env(schema: Schema) -> Schema {
    schema
}
