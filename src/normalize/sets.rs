//! Canonical ordering of set-typed collections.

use super::RewriteRule;
use crate::config::IgnoreDiff;
use crate::error::{Result, SchemaErrorKind, StateDiffError};
use crate::model::{Resource, ValuePath};
use crate::schema::Block;
use serde_json::{Map, Value};

/// Reorders set-typed arrays by their rewrite-normalized serialization.
#[derive(Debug, Clone, Default)]
pub struct SetNormalizer {
    rules: Vec<RewriteRule>,
}

impl SetNormalizer {
    #[must_use]
    pub const fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Build a normalizer from the operator's `ignore_diff` pairs.
    #[must_use]
    pub fn from_ignore_diff(pairs: &[IgnoreDiff]) -> Self {
        Self::new(RewriteRule::from_pairs(pairs))
    }

    /// Normalize a resource against its schema.
    ///
    /// Every non-null value below the root is checked against the schema, so
    /// a value tree that does not match its schema fails here rather than
    /// being compared loosely.
    pub fn normalize(&self, schema: &Block, resource: &Resource) -> Result<Resource> {
        let values = self.normalize_value(schema, &resource.values, &ValuePath::root())?;
        Ok(resource.with_values(values))
    }

    /// Normalize a value tree rooted at `path`.
    pub fn normalize_value(
        &self,
        schema: &Block,
        value: &Value,
        path: &ValuePath,
    ) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let is_set = !path.is_root() && schema.is_set(path)?;

        match value {
            Value::Array(items) => {
                let normalized = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| self.normalize_value(schema, item, &path.index(i)))
                    .collect::<Result<Vec<_>>>()?;
                if is_set {
                    self.sort(normalized).map(Value::Array)
                } else {
                    Ok(Value::Array(normalized))
                }
            }
            _ if is_set => Err(StateDiffError::schema(
                "normalizing set-typed value",
                SchemaErrorKind::SetValueNotArray {
                    path: path.to_pointer(),
                },
            )),
            Value::Object(members) => members
                .iter()
                .map(|(k, v)| Ok((k.clone(), self.normalize_value(schema, v, &path.key(k))?)))
                .collect::<Result<Map<String, Value>>>()
                .map(Value::Object),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(value.clone()),
        }
    }

    /// Order elements by their serialization after rewrite substitution,
    /// breaking ties on the raw serialization.
    fn sort(&self, items: Vec<Value>) -> Result<Vec<Value>> {
        let mut keyed = items
            .into_iter()
            .map(|item| {
                let raw = serde_json::to_string(&item)?;
                let key = RewriteRule::apply_all(&self.rules, &raw);
                Ok((key, raw, item))
            })
            .collect::<Result<Vec<_>>>()?;

        keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        Ok(keyed.into_iter().map(|(_, _, item)| item).collect())
    }
}
