//! Schema-aware drift diff.
//!
//! [`DiffEngine`] pairs the resources of two snapshots by canonical address,
//! normalizes both sides, computes a structural edit script per pair with
//! [`diff_values`], and keeps only the operations that represent
//! configuration drift:
//!
//! 1. operations the [`IgnoreMatcher`](crate::matching::IgnoreMatcher)
//!    suppresses are dropped;
//! 2. operations on computed paths are dropped;
//! 3. operations on policy-document attributes are re-diffed structurally
//!    and attached as nested diffs;
//! 4. everything else is reported as a [`FieldDiff`].
//!
//! # Example
//!
//! ```ignore
//! use tfstate_diff::diff::DiffEngine;
//!
//! let engine = DiffEngine::new(schema_index, &config)?;
//! let result = engine.compare(&left, &right)?;
//! for resource in &result.state_diff.resource_diffs {
//!     println!("{}: {} changes", resource.name, resource.total_changes());
//! }
//! ```

mod engine;
mod engine_matching;
mod engine_policy;
mod patch;
mod result;

pub use engine::DiffEngine;
pub use engine_matching::{match_resources, ResourceMatches};
pub use engine_policy::{is_policy_path, policy_document, POLICY_ATTRIBUTES};
pub use patch::{diff_values, values_equivalent, Operation, OperationKind};
pub use result::{ComparisonResult, FieldDiff, ResourceDiff, StateDiff};
