//! Configuration types for drift comparison.

use serde::{Deserialize, Serialize};

/// Operator configuration for a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Address/path regex pairs whose matches are never reported
    pub ignore_pattern: Vec<IgnorePattern>,
    /// Literal pairs treated as interchangeable inside string values
    pub ignore_diff: Vec<IgnoreDiff>,
    /// Extra (resource type, attribute) identity sources
    pub identity_sources: Vec<IdentitySource>,
    /// What to do with resources whose type has no schema
    pub missing_schema: MissingSchemaPolicy,
}

impl DriftConfig {
    /// Create a `DriftConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `DriftConfig` builder.
    pub fn builder() -> DriftConfigBuilder {
        DriftConfigBuilder::default()
    }
}

/// Suppress changes on matching resources and paths.
///
/// An absent regex matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnorePattern {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Declare `left` (in the left snapshot) and `right` (in the right snapshot)
/// as equivalent wherever they appear inside a string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreDiff {
    pub left: String,
    pub right: String,
}

/// A resource attribute whose value other resources reference by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySource {
    pub resource_type: String,
    pub attribute: String,
}

/// Policy for resources whose schema cannot be found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingSchemaPolicy {
    /// Fail the whole comparison
    #[default]
    Abort,
    /// Leave the resource out of the comparison and list it as skipped
    Skip,
}

// ============================================================================
// Builder for DriftConfig
// ============================================================================

/// Builder for constructing `DriftConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct DriftConfigBuilder {
    config: DriftConfig,
}

impl DriftConfigBuilder {
    /// Ignore paths matching `path` on resources matching `address`.
    pub fn ignore_pattern(mut self, address: Option<&str>, path: Option<&str>) -> Self {
        self.config.ignore_pattern.push(IgnorePattern {
            address: address.map(str::to_string),
            path: path.map(str::to_string),
        });
        self
    }

    /// Ignore paths matching `path` on every resource.
    pub fn ignore_path(self, path: &str) -> Self {
        self.ignore_pattern(None, Some(path))
    }

    /// Ignore every change on resources matching `address`.
    pub fn ignore_address(self, address: &str) -> Self {
        self.ignore_pattern(Some(address), None)
    }

    /// Treat `left` and `right` as interchangeable substrings.
    pub fn ignore_diff(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.config.ignore_diff.push(IgnoreDiff {
            left: left.into(),
            right: right.into(),
        });
        self
    }

    /// Register an extra identity source.
    pub fn identity_source(
        mut self,
        resource_type: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        self.config.identity_sources.push(IdentitySource {
            resource_type: resource_type.into(),
            attribute: attribute.into(),
        });
        self
    }

    pub const fn missing_schema(mut self, policy: MissingSchemaPolicy) -> Self {
        self.config.missing_schema = policy;
        self
    }

    #[must_use]
    pub fn build(self) -> DriftConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_yaml() {
        let yaml = r#"
ignore_pattern:
  - address: '^aws_instance\.'
    path: '^/ami$'
  - path: '^/last_modified'
ignore_diff:
  - left: "-prod"
    right: "-dev"
"#;
        let config: DriftConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.ignore_pattern.len(), 2);
        assert_eq!(config.ignore_pattern[1].address, None);
        assert_eq!(config.ignore_diff[0].right, "-dev");
        assert!(config.identity_sources.is_empty());
        assert_eq!(config.missing_schema, MissingSchemaPolicy::Abort);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: DriftConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, DriftConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = DriftConfig::builder()
            .ignore_path("^/tags_all")
            .ignore_address("^data\\.")
            .ignore_diff("-prod", "-dev")
            .identity_source("aws_lb", "dns_name")
            .missing_schema(MissingSchemaPolicy::Skip)
            .build();

        assert_eq!(config.ignore_pattern.len(), 2);
        assert_eq!(config.ignore_pattern[1].address.as_deref(), Some("^data\\."));
        assert_eq!(config.identity_sources[0].attribute, "dns_name");
        assert_eq!(config.missing_schema, MissingSchemaPolicy::Skip);
    }
}
