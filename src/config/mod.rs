//! Configuration module for tfstate-diff.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation of patterns and substitution rules
//! - YAML config file loading and discovery
//!
//! # Configuration File
//!
//! Pass a file explicitly, or place `.tfstate-diff.yaml` in the working
//! directory or `~/.config/tfstate-diff/`:
//!
//! ```yaml
//! ignore_pattern:
//!   - address: '^aws_instance\.'
//!     path: '^/ami$'
//!   - path: '^/last_modified'
//! ignore_diff:
//!   - left: "-prod"
//!     right: "-dev"
//! identity_sources:
//!   - resource_type: aws_lb
//!     attribute: dns_name
//! missing_schema: abort
//! ```
//!
//! ```rust,ignore
//! use tfstate_diff::config::{file::load_or_default, DriftConfig};
//!
//! let config = DriftConfig::builder()
//!     .ignore_path(r"^/tags_all")
//!     .ignore_diff("-prod", "-dev")
//!     .build();
//!
//! let (config, loaded_from) = load_or_default(None);
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    DriftConfig, DriftConfigBuilder, IdentitySource, IgnoreDiff, IgnorePattern,
    MissingSchemaPolicy,
};
pub use validation::{ConfigError, Validatable};
