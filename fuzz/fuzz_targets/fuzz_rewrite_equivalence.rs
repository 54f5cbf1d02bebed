#![no_main]
use libfuzzer_sys::fuzz_target;
use tfstate_diff::config::IgnoreDiff;
use tfstate_diff::matching::rewrite_equivalent;

/// Fuzz lockstep substitution matching.
///
/// Input is split on NUL into old, new and a substitution pair.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut parts = s.splitn(4, '\0');
        let old = parts.next().unwrap_or_default();
        let new = parts.next().unwrap_or_default();
        let pair = IgnoreDiff {
            left: parts.next().unwrap_or_default().to_string(),
            right: parts.next().unwrap_or_default().to_string(),
        };

        let _ = rewrite_equivalent(old, new, std::slice::from_ref(&pair));
        assert_eq!(rewrite_equivalent(old, new, &[]), old == new);
    }
});
