//! Structural comparison of JSON policy documents embedded in string
//! attributes.

use super::{diff_values, FieldDiff, Operation, ResourceDiff};
use crate::error::{PolicyErrorKind, Result, StateDiffError};
use crate::matching::IgnoreMatcher;
use crate::model::ValuePath;
use crate::normalize::IdentityMap;
use serde_json::Value;

/// Attribute names whose string values hold JSON access-policy documents.
pub const POLICY_ATTRIBUTES: &[&str] = &["policy", "inline_policy", "assume_role_policy"];

/// Whether `path` ends at a policy-document attribute.
#[must_use]
pub fn is_policy_path(path: &ValuePath) -> bool {
    path.last_key()
        .is_some_and(|key| POLICY_ATTRIBUTES.contains(&key))
}

/// Whether both sides of `op` can be read as policy documents.
///
/// Some providers model a policy as a nested block rather than an encoded
/// string; such operations are compared as ordinary fields.
pub(super) fn is_policy_operation(op: &Operation) -> bool {
    is_policy_path(&op.path)
        && [op.old_value.as_ref(), op.new_value.as_ref()]
            .into_iter()
            .all(|v| matches!(v, None | Some(Value::Null | Value::String(_))))
}

/// Decode a policy attribute value.
///
/// Absent, null and empty values decode to the empty document, as does an
/// encoded `null`. Any other document must be a JSON object.
pub fn policy_document(value: Option<&Value>) -> std::result::Result<Value, PolicyErrorKind> {
    let empty = || Value::Object(serde_json::Map::new());
    match value {
        None | Some(Value::Null) => Ok(empty()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(empty()),
        Some(Value::String(s)) => match serde_json::from_str(s)? {
            Value::Null => Ok(empty()),
            doc @ Value::Object(_) => Ok(doc),
            other => Err(PolicyErrorKind::NotAnObject(json_type_name(&other))),
        },
        Some(other) => Err(PolicyErrorKind::NotAString(json_type_name(other))),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Diff the two policy documents carried by `op`.
///
/// Each side is resolved against its own identity map. The nested diff is
/// named after the attribute path, and its field paths and ignore checks use
/// that path as their base.
pub(super) fn diff_policy(
    ignore: &IgnoreMatcher,
    address: &str,
    op: &Operation,
    left_ids: &IdentityMap,
    right_ids: &IdentityMap,
) -> Result<ResourceDiff> {
    let base_path = op.path.to_pointer();
    let decode = |value: Option<&Value>| {
        policy_document(value).map_err(|e| StateDiffError::policy(address, &base_path, e))
    };

    let left = left_ids.normalize(&decode(op.old_value.as_ref())?);
    let right = right_ids.normalize(&decode(op.new_value.as_ref())?);

    let mut diff = ResourceDiff::new(&base_path);
    diff.fields = diff_values(&left, &right)
        .iter()
        .filter(|nested| !ignore.is_ignorable(address, &base_path, nested))
        .map(|nested| FieldDiff::from_operation(&base_path, nested))
        .collect();
    Ok(diff)
}
