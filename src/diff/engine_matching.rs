//! Resource matching logic for the diff engine.
//!
//! Resources are paired between the left and right snapshots by canonical
//! address. Matching is 1:1 and exclusive: a right resource is paired with
//! at most one left resource.

use crate::model::Resource;

/// Result of pairing two resource lists.
#[derive(Debug, Clone, Default)]
pub struct ResourceMatches<'a> {
    /// Matched `(left, right)` pairs, in left order
    pub pairs: Vec<(&'a Resource, &'a Resource)>,
    /// Unmatched left resources, in input order
    pub left_only: Vec<&'a Resource>,
    /// Unmatched right resources, in input order
    pub right_only: Vec<&'a Resource>,
}

/// Pair resources whose canonical addresses are equal.
///
/// Each left resource takes the first unmatched right resource with the same
/// canonical address. A linear scan per left resource is adequate for the
/// few thousand resources a snapshot holds.
pub fn match_resources<'a>(left: &'a [Resource], right: &'a [Resource]) -> ResourceMatches<'a> {
    let right_keys: Vec<_> = right.iter().map(Resource::canonical_address).collect();
    let mut matched = vec![false; right.len()];
    let mut result = ResourceMatches::default();

    for l in left {
        let key = l.canonical_address();
        let found = right_keys
            .iter()
            .enumerate()
            .find(|(j, k)| !matched[*j] && **k == key)
            .map(|(j, _)| j);

        match found {
            Some(j) => {
                matched[j] = true;
                result.pairs.push((l, &right[j]));
            }
            None => result.left_only.push(l),
        }
    }

    result.right_only = right
        .iter()
        .zip(&matched)
        .filter(|(_, m)| !**m)
        .map(|(r, _)| r)
        .collect();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resource(address: &str) -> Resource {
        serde_json::from_value(json!({"address": address, "type": "aws_vpc"})).unwrap()
    }

    fn addresses(resources: &[&Resource]) -> Vec<String> {
        resources.iter().map(|r| r.address.clone()).collect()
    }

    #[test]
    fn test_matches_across_dash_underscore() {
        let left = vec![resource("aws_vpc.main-vpc"), resource("aws_vpc.old")];
        let right = vec![resource("aws_vpc.new"), resource("aws_vpc.main_vpc")];
        let m = match_resources(&left, &right);

        assert_eq!(m.pairs.len(), 1);
        assert_eq!(m.pairs[0].0.address, "aws_vpc.main-vpc");
        assert_eq!(m.pairs[0].1.address, "aws_vpc.main_vpc");
        assert_eq!(addresses(&m.left_only), vec!["aws_vpc.old"]);
        assert_eq!(addresses(&m.right_only), vec!["aws_vpc.new"]);
    }

    #[test]
    fn test_matching_is_exclusive() {
        let left = vec![resource("aws_vpc.a-b"), resource("aws_vpc.a_b")];
        let right = vec![resource("aws_vpc.a_b")];
        let m = match_resources(&left, &right);

        assert_eq!(m.pairs.len(), 1);
        assert_eq!(addresses(&m.left_only), vec!["aws_vpc.a_b"]);
        assert!(m.right_only.is_empty());
    }

    #[test]
    fn test_empty_sides() {
        let right = vec![resource("aws_vpc.a")];
        let m = match_resources(&[], &right);
        assert!(m.pairs.is_empty());
        assert_eq!(m.right_only.len(), 1);
    }
}
