//! Data model shared by every comparison stage.
//!
//! Resources and their value trees are parsed from Terraform's JSON output
//! formats. Value trees stay as [`serde_json::Value`], which is already an
//! exhaustive tagged variant over JSON's dynamic types; paths into them are
//! typed [`ValuePath`]s rather than slash-joined strings.

mod address;
mod path;
mod resource;

pub use address::CanonicalAddress;
pub use path::{PathSegment, ValuePath};
pub use resource::{Resource, ResourceMode, Snapshot};
