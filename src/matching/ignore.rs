//! Compiled ignore rules.

use super::rewrite_equivalent;
use crate::config::{DriftConfig, IgnoreDiff, Validatable};
use crate::diff::Operation;
use crate::error::{Result, StateDiffError};
use regex::Regex;
use serde_json::Value;

/// Top-level attributes whose contents are never reported.
pub const TAG_NAMESPACES: &[&str] = &["tags", "tags_all"];

/// A compiled `ignore_pattern` entry. `None` matches everything.
#[derive(Debug, Clone)]
struct CompiledPattern {
    address: Option<Regex>,
    path: Option<Regex>,
}

impl CompiledPattern {
    fn matches(&self, address: &str, full_path: &str) -> bool {
        self.address.as_ref().map_or(true, |re| re.is_match(address))
            && self.path.as_ref().map_or(true, |re| re.is_match(full_path))
    }
}

/// Decides whether a diff operation is suppressible.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    patterns: Vec<CompiledPattern>,
    substitutions: Vec<IgnoreDiff>,
}

impl IgnoreMatcher {
    /// Compile the operator configuration.
    ///
    /// An invalid regex is a fatal configuration error.
    pub fn new(config: &DriftConfig) -> Result<Self> {
        let errors = config.validate();
        if !errors.is_empty() {
            let all: Vec<String> = errors.iter().map(ToString::to_string).collect();
            return Err(StateDiffError::config(all.join("; ")));
        }

        let patterns = config
            .ignore_pattern
            .iter()
            .map(|p| {
                Ok(CompiledPattern {
                    address: compile(p.address.as_deref())?,
                    path: compile(p.path.as_deref())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            substitutions: config.ignore_diff.clone(),
        })
    }

    /// Whether `op`, found on resource `address` below `base_path`, should
    /// be dropped from the report.
    ///
    /// Ignore patterns match against `base_path` followed by the operation's
    /// own path; the tag namespaces are checked on the operation's own path.
    #[must_use]
    pub fn is_ignorable(&self, address: &str, base_path: &str, op: &Operation) -> bool {
        let path = op.path.to_pointer();
        let full_path = format!("{base_path}{path}");

        if self.patterns.iter().any(|p| p.matches(address, &full_path)) {
            return true;
        }

        if is_tag_path(op) {
            return true;
        }

        if is_absent(op.old_value.as_ref()) && is_absent(op.new_value.as_ref()) {
            return true;
        }

        match (
            unwrap_single_string(op.old_value.as_ref()),
            unwrap_single_string(op.new_value.as_ref()),
        ) {
            (Some(old), Some(new)) => self.strings_equivalent(old, new),
            _ => false,
        }
    }

    /// Whether two strings differ only by declared substitutions.
    #[must_use]
    pub fn strings_equivalent(&self, old: &str, new: &str) -> bool {
        rewrite_equivalent(old, new, &self.substitutions)
    }
}

fn compile(pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|p| {
            Regex::new(p).map_err(|e| StateDiffError::config(format!("Invalid regex '{p}': {e}")))
        })
        .transpose()
}

fn is_tag_path(op: &Operation) -> bool {
    let segments = op.path.segments();
    segments.len() > 1
        && segments[0]
            .as_key()
            .is_some_and(|k| TAG_NAMESPACES.contains(&k))
}

fn is_absent(value: Option<&Value>) -> bool {
    value.map_or(true, Value::is_null)
}

/// A string, or a one-element array holding a string.
fn unwrap_single_string(value: Option<&Value>) -> Option<&str> {
    match value? {
        Value::String(s) => Some(s),
        Value::Array(items) if items.len() == 1 => items[0].as_str(),
        _ => None,
    }
}
