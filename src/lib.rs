//! **Schema-aware drift detection between Terraform state and plan snapshots.**
//!
//! `tfstate-diff` compares two `terraform show -json` documents, for example
//! a production and a staging state, and reports only the differences that
//! are genuine configuration drift. Provider-computed values, set ordering,
//! generated identifiers, tags and operator-declared environment
//! substitutions are all suppressed.
//!
//! ## Core Concepts & Modules
//!
//! - **[`schema`]**: the provider schema index. Classifies every path into a
//!   resource's values as a user argument or a computed value, and knows
//!   which collections are order-insignificant sets.
//! - **[`normalize`]**: per-side identity resolution (generated IDs and ARNs
//!   become symbolic references to the owning resource) and canonical set
//!   ordering.
//! - **[`diff`]**: the [`DiffEngine`], which pairs resources by canonical
//!   address, diffs their value trees and re-diffs embedded JSON policy
//!   documents structurally.
//! - **[`matching`]**: the [`IgnoreMatcher`](matching::IgnoreMatcher) deciding
//!   which changes are noise.
//! - **[`reports`]**: summary, detail and JSON renderings of a
//!   [`ComparisonResult`].
//! - **[`pipeline`]**: file-level orchestration of the above.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use tfstate_diff::{parsers, DiffEngine, DriftConfig, SchemaIndex};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let schemas = parsers::load_provider_schemas(Path::new("schema.json"))?;
//!     let left = parsers::load_snapshot(Path::new("prod.json"))?;
//!     let right = parsers::load_snapshot(Path::new("staging.json"))?;
//!
//!     let config = DriftConfig::builder().ignore_diff("-prod", "-stg").build();
//!     let engine = DiffEngine::new(SchemaIndex::new(schemas), &config)?;
//!     let result = engine.compare(&left, &right)?;
//!
//!     for resource in &result.state_diff.resource_diffs {
//!         println!("{}", resource.name);
//!         for field in &resource.fields {
//!             println!("  {} : {} -> {}", field.path, field.old_value, field.new_value);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod matching;
pub mod model;
pub mod normalize;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod schema;

// Re-export main types for convenience
pub use config::{ConfigError, Validatable};
pub use config::{DriftConfig, DriftConfigBuilder, MissingSchemaPolicy};
pub use diff::{ComparisonResult, DiffEngine, FieldDiff, ResourceDiff, StateDiff};
pub use error::{ErrorContext, Result, StateDiffError};
pub use model::{CanonicalAddress, Resource, ResourceMode, Snapshot, ValuePath};
pub use parsers::{parse_provider_schemas, parse_snapshot};
pub use reports::{ReportFormat, ReportGenerator};
pub use schema::SchemaIndex;
