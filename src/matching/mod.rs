//! Suppression of changes that are not configuration drift.
//!
//! The [`IgnoreMatcher`] decides, per diff operation, whether the change is
//! noise: an operator-declared ignore pattern, the reserved tag namespaces,
//! a null-to-null change, or two strings that differ only by declared
//! environment substitutions (see [`rewrite_equivalent`]).
//!
//! ```ignore
//! use tfstate_diff::config::DriftConfig;
//! use tfstate_diff::matching::IgnoreMatcher;
//!
//! let config = DriftConfig::builder().ignore_diff("-prod", "-dev").build();
//! let matcher = IgnoreMatcher::new(&config)?;
//! assert!(matcher.strings_equivalent("vpc-prod-1", "vpc-dev-1"));
//! ```

mod equivalence;
mod ignore;

pub use equivalence::rewrite_equivalent;
pub use ignore::{IgnoreMatcher, TAG_NAMESPACES};
