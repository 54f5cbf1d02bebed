//! Canonical resource addresses used to join the two sides of a comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource address with `-` folded to `_`.
///
/// Two resources are the same resource iff their canonical addresses are
/// equal. Canonicalization is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalAddress(String);

impl CanonicalAddress {
    /// Canonicalize a raw resource address.
    #[must_use]
    pub fn new(address: &str) -> Self {
        Self(address.replace('-', "_"))
    }

    /// The canonical address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build an identity token naming one attribute of this resource,
    /// e.g. `aws_vpc.main.id`.
    #[must_use]
    pub fn attribute_token(&self, attribute: &str) -> String {
        format!("{}.{attribute}", self.0)
    }

    /// Build an identity token naming one element of a multi-valued attribute.
    #[must_use]
    pub fn indexed_attribute_token(&self, attribute: &str, index: usize) -> String {
        format!("{}.{attribute}.{index}", self.0)
    }
}

impl fmt::Display for CanonicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashes_fold_to_underscores() {
        let a = CanonicalAddress::new("aws_s3_bucket.my-bucket");
        let b = CanonicalAddress::new("aws_s3_bucket.my_bucket");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "aws_s3_bucket.my_bucket");
    }

    #[test]
    fn test_idempotent() {
        let once = CanonicalAddress::new("module.app-1.aws_vpc.main-vpc");
        let twice = CanonicalAddress::new(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tokens() {
        let a = CanonicalAddress::new("aws_kms_key.data-key");
        assert_eq!(a.attribute_token("key_id"), "aws_kms_key.data_key.key_id");
        assert_eq!(
            a.indexed_attribute_token("ids", 2),
            "aws_kms_key.data_key.ids.2"
        );
    }
}
