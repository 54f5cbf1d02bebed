//! Configuration validation for tfstate-diff.

use super::types::{DriftConfig, IdentitySource, IgnoreDiff, IgnorePattern};
use regex::Regex;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for DriftConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (i, pattern) in self.ignore_pattern.iter().enumerate() {
            errors.extend(prefixed(&format!("ignore_pattern[{i}]"), pattern.validate()));
        }
        for (i, pair) in self.ignore_diff.iter().enumerate() {
            errors.extend(prefixed(&format!("ignore_diff[{i}]"), pair.validate()));
        }
        for (i, source) in self.identity_sources.iter().enumerate() {
            errors.extend(prefixed(&format!("identity_sources[{i}]"), source.validate()));
        }
        errors
    }
}

impl Validatable for IgnorePattern {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (field, pattern) in [("address", &self.address), ("path", &self.path)] {
            if let Some(pattern) = pattern {
                if let Err(e) = Regex::new(pattern) {
                    errors.push(ConfigError {
                        field: field.to_string(),
                        message: format!("Invalid regex '{pattern}': {e}"),
                    });
                }
            }
        }
        errors
    }
}

impl Validatable for IgnoreDiff {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.left.is_empty() && self.right.is_empty() {
            errors.push(ConfigError {
                field: "left".to_string(),
                message: "At least one of left/right must be non-empty".to_string(),
            });
        }
        errors
    }
}

impl Validatable for IdentitySource {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.resource_type.is_empty() {
            errors.push(ConfigError {
                field: "resource_type".to_string(),
                message: "Resource type must not be empty".to_string(),
            });
        }
        if self.attribute.is_empty() {
            errors.push(ConfigError {
                field: "attribute".to_string(),
                message: "Attribute must not be empty".to_string(),
            });
        }
        errors
    }
}

fn prefixed(prefix: &str, errors: Vec<ConfigError>) -> impl Iterator<Item = ConfigError> + '_ {
    errors.into_iter().map(move |e| ConfigError {
        field: format!("{prefix}.{}", e.field),
        message: e.message,
    })
}
