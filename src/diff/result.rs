//! Diff result structures.

use super::Operation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single reported field change.
///
/// Values are rendered to their canonical JSON text; an absent side renders
/// as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDiff {
    /// JSON pointer of the changed value
    pub path: String,
    pub old_value: String,
    pub new_value: String,
}

impl FieldDiff {
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            old_value: old_value.into(),
            new_value: new_value.into(),
        }
    }

    /// Render an operation, prefixing its path with `base_path`.
    #[must_use]
    pub fn from_operation(base_path: &str, op: &Operation) -> Self {
        Self {
            path: format!("{base_path}{}", op.path),
            old_value: render(op.old_value.as_ref()),
            new_value: render(op.new_value.as_ref()),
        }
    }
}

fn render(value: Option<&Value>) -> String {
    value.map_or_else(|| "null".to_string(), Value::to_string)
}

/// Surviving changes for one matched resource, or for one policy document
/// embedded in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDiff {
    /// Resource address, or the attribute path for a nested policy diff
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDiff>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<ResourceDiff>,
}

impl ResourceDiff {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            policies: Vec::new(),
        }
    }

    /// True when no field or policy change survived filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.policies.is_empty()
    }

    /// Field changes including those inside nested policy documents.
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.fields.len()
            + self
                .policies
                .iter()
                .map(Self::total_changes)
                .sum::<usize>()
    }
}

/// Comparison of one pair of resource lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDiff {
    /// Number of resources matched by canonical address
    pub common: usize,
    pub resource_diffs: Vec<ResourceDiff>,
    pub left_only: Vec<String>,
    pub right_only: Vec<String>,
    /// Resources left out of the comparison because no schema was found
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl StateDiff {
    /// Whether anything besides unchanged matched resources was found.
    #[must_use]
    pub fn has_drift(&self) -> bool {
        !self.resource_diffs.is_empty() || !self.left_only.is_empty() || !self.right_only.is_empty()
    }
}

/// Complete result of comparing two snapshots.
///
/// `plan_diff` is present when either input is a plan document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ComparisonResult {
    pub state_diff: StateDiff,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_diff: Option<StateDiff>,
}

impl ComparisonResult {
    pub fn has_drift(&self) -> bool {
        self.state_diff.has_drift() || self.plan_diff.as_ref().is_some_and(StateDiff::has_drift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValuePath;
    use serde_json::json;

    #[test]
    fn test_field_diff_renders_json_text() {
        let op = Operation::replace(
            ValuePath::from_pointer("/Statement/0/Effect"),
            json!("Allow"),
            json!("Deny"),
        );
        let field = FieldDiff::from_operation("/policy", &op);
        assert_eq!(
            field,
            FieldDiff::new("/policy/Statement/0/Effect", "\"Allow\"", "\"Deny\"")
        );

        let op = Operation::add(ValuePath::from_pointer("/ports"), json!([80, 443]));
        let field = FieldDiff::from_operation("", &op);
        assert_eq!(field.old_value, "null");
        assert_eq!(field.new_value, "[80,443]");
    }

    #[test]
    fn test_empty_collections_omitted_from_json() {
        let diff = ResourceDiff::new("aws_s3_bucket.b");
        assert_eq!(serde_json::to_value(&diff).unwrap(), json!({"name": "aws_s3_bucket.b"}));

        let result = ComparisonResult::default();
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"state_diff": {
                "common": 0,
                "resource_diffs": [],
                "left_only": [],
                "right_only": []
            }})
        );
    }

    #[test]
    fn test_total_changes_counts_nested() {
        let mut diff = ResourceDiff::new("aws_iam_role.r");
        diff.fields.push(FieldDiff::new("/name", "\"a\"", "\"b\""));
        let mut policy = ResourceDiff::new("/assume_role_policy");
        policy.fields.push(FieldDiff::new("/assume_role_policy/Version", "null", "\"2012-10-17\""));
        policy.fields.push(FieldDiff::new("/assume_role_policy/Id", "null", "\"x\""));
        diff.policies.push(policy);
        assert_eq!(diff.total_changes(), 3);
        assert!(!diff.is_empty());
    }

    #[test]
    fn test_has_drift() {
        let mut result = ComparisonResult::default();
        result.state_diff.common = 3;
        assert!(!result.has_drift());

        result.plan_diff = Some(StateDiff {
            right_only: vec!["aws_vpc.new".to_string()],
            ..StateDiff::default()
        });
        assert!(result.has_drift());
    }
}
