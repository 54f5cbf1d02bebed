//! Rewrite rules derived from operator-declared substitutions.

use crate::config::IgnoreDiff;

/// A literal substitution applied before sort-key comparison.
///
/// The longer literal of each declared pair is always rewritten into the
/// shorter one, so equivalent values collapse onto the same sort key no
/// matter which side they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pub from: String,
    pub to: String,
}

impl RewriteRule {
    /// Order a declared pair as (longer, shorter). Equal lengths keep the
    /// left literal as `from`.
    #[must_use]
    pub fn from_pair(pair: &IgnoreDiff) -> Self {
        if pair.left.len() >= pair.right.len() {
            Self {
                from: pair.left.clone(),
                to: pair.right.clone(),
            }
        } else {
            Self {
                from: pair.right.clone(),
                to: pair.left.clone(),
            }
        }
    }

    /// Derive one rule per declared pair, preserving declaration order.
    #[must_use]
    pub fn from_pairs(pairs: &[IgnoreDiff]) -> Vec<Self> {
        pairs.iter().map(Self::from_pair).collect()
    }

    /// Apply every rule in order as a literal substring replacement.
    #[must_use]
    pub fn apply_all(rules: &[Self], input: &str) -> String {
        rules.iter().fold(input.to_string(), |acc, rule| {
            if rule.from.is_empty() {
                acc
            } else {
                acc.replace(&rule.from, &rule.to)
            }
        })
    }
}
