#![no_main]
use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use tfstate_diff::diff::{diff_values, policy_document};

/// Fuzz policy decoding and structural diffing of the decoded document
/// against itself and against the empty document.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let value = Value::String(s.to_string());
        if let Ok(doc) = policy_document(Some(&value)) {
            assert!(diff_values(&doc, &doc).is_empty());
            let empty = serde_json::json!({});
            let _ = diff_values(&doc, &empty);
        }
    }
});
