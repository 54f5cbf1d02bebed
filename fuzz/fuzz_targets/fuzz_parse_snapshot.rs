#![no_main]
use libfuzzer_sys::fuzz_target;
use tfstate_diff::parse_snapshot;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz the state/plan document parser.
///
/// Also wraps input as a resource list inside a minimal state document so
/// module flattening and resource decoding are reached.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_snapshot(s);

        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(r#"{{"values":{{"root_module":{{"resources":[{s}]}}}}}}"#);
            let _ = parse_snapshot(&wrapped);
        }
    }
});
