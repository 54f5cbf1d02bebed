//! Lockstep string comparison under declared substitutions.

use crate::config::IgnoreDiff;

/// Whether `old` and `new` are equal once declared substitutions are taken
/// into account.
///
/// Both strings are scanned left to right together. At each position the
/// pairs are tried in declaration order: if the rest of `old` starts with a
/// pair's `left` and the rest of `new` starts with its `right`, both cursors
/// skip past the literals. Otherwise the current bytes must be identical and
/// both cursors advance by one. The strings are equivalent iff both are
/// consumed completely.
///
/// Pairs whose literals are both empty are skipped; they could never
/// advance the scan.
#[must_use]
pub fn rewrite_equivalent(old: &str, new: &str, pairs: &[IgnoreDiff]) -> bool {
    let old = old.as_bytes();
    let new = new.as_bytes();
    let (mut i, mut j) = (0, 0);

    'scan: while i < old.len() && j < new.len() {
        for pair in pairs {
            if pair.left.is_empty() && pair.right.is_empty() {
                continue;
            }
            if old[i..].starts_with(pair.left.as_bytes())
                && new[j..].starts_with(pair.right.as_bytes())
            {
                i += pair.left.len();
                j += pair.right.len();
                continue 'scan;
            }
        }
        if old[i] != new[j] {
            return false;
        }
        i += 1;
        j += 1;
    }

    i == old.len() && j == new.len()
}
