//! Structural edit scripts between value trees.
//!
//! Produces JSON-Patch-like operations. Numbers compare by value (`1` equals
//! `1.0`), and two arrays of equal length holding the same elements in a
//! different order produce no operations.

use crate::model::ValuePath;
use serde_json::{Map, Number, Value};

/// What an operation does at its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Present only on the right
    Add,
    /// Present only on the left
    Remove,
    /// Present on both sides with different values
    Replace,
}

/// One change between two value trees.
///
/// `old_value` is `None` for additions, `new_value` is `None` for removals.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    pub path: ValuePath,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
}

impl Operation {
    #[must_use]
    pub const fn add(path: ValuePath, value: Value) -> Self {
        Self {
            kind: OperationKind::Add,
            path,
            old_value: None,
            new_value: Some(value),
        }
    }

    #[must_use]
    pub const fn remove(path: ValuePath, value: Value) -> Self {
        Self {
            kind: OperationKind::Remove,
            path,
            old_value: Some(value),
            new_value: None,
        }
    }

    #[must_use]
    pub const fn replace(path: ValuePath, old: Value, new: Value) -> Self {
        Self {
            kind: OperationKind::Replace,
            path,
            old_value: Some(old),
            new_value: Some(new),
        }
    }
}

/// Compute the operations turning `left` into `right`.
///
/// Object members are visited in key order, so the output is deterministic.
/// Arrays that are not permutations of each other are compared element by
/// element; surplus elements become removals or additions at their index.
#[must_use]
pub fn diff_values(left: &Value, right: &Value) -> Vec<Operation> {
    let mut ops = Vec::new();
    diff_into(&ValuePath::root(), left, right, &mut ops);
    ops
}

fn diff_into(path: &ValuePath, left: &Value, right: &Value, ops: &mut Vec<Operation>) {
    match (left, right) {
        (Value::Object(l), Value::Object(r)) => diff_objects(path, l, r, ops),
        (Value::Array(l), Value::Array(r)) => {
            if l.len() == r.len() && is_permutation(l, r) {
                return;
            }
            let common = l.len().min(r.len());
            for i in 0..common {
                diff_into(&path.index(i), &l[i], &r[i], ops);
            }
            for (i, value) in l.iter().enumerate().skip(common) {
                ops.push(Operation::remove(path.index(i), value.clone()));
            }
            for (i, value) in r.iter().enumerate().skip(common) {
                ops.push(Operation::add(path.index(i), value.clone()));
            }
        }
        _ if values_equivalent(left, right) => {}
        _ => ops.push(Operation::replace(path.clone(), left.clone(), right.clone())),
    }
}

fn diff_objects(
    path: &ValuePath,
    left: &Map<String, Value>,
    right: &Map<String, Value>,
    ops: &mut Vec<Operation>,
) {
    for (key, l) in left {
        match right.get(key) {
            Some(r) => diff_into(&path.key(key), l, r, ops),
            None => ops.push(Operation::remove(path.key(key), l.clone())),
        }
    }
    for (key, r) in right {
        if !left.contains_key(key) {
            ops.push(Operation::add(path.key(key), r.clone()));
        }
    }
}

/// Structural equality with numeric equivalence.
#[must_use]
pub fn values_equivalent(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equivalent(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equivalent(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, x)| b.get(k).is_some_and(|y| values_equivalent(x, y)))
        }
        _ => false,
    }
}

fn numbers_equivalent(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Whether two equal-length arrays hold equivalent elements in any order.
fn is_permutation(left: &[Value], right: &[Value]) -> bool {
    let mut used = vec![false; right.len()];
    left.iter().all(|l| {
        let found = right
            .iter()
            .enumerate()
            .find(|(j, r)| !used[*j] && values_equivalent(l, r))
            .map(|(j, _)| j);
        match found {
            Some(j) => {
                used[j] = true;
                true
            }
            None => false,
        }
    })
}
