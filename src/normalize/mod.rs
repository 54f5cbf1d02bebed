//! Value-tree normalization applied before diffing.
//!
//! Two passes run over each side independently:
//!
//! 1. [`IdentityMap`] rewrites generated identifiers and ARNs into symbolic
//!    references to the resource that owns them, so two environments that
//!    provision the same topology compare equal on cross-references.
//! 2. [`SetNormalizer`] reorders set-typed collections into a canonical order
//!    derived from their content, so element order never shows up as drift.

mod identity;
mod rewrite;
mod sets;

pub use identity::{IdentityMap, ARN_ATTRIBUTES, BUILTIN_IDENTITY_SOURCES};
pub use rewrite::RewriteRule;
pub use sets::SetNormalizer;
