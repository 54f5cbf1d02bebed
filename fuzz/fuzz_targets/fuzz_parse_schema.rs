#![no_main]
use libfuzzer_sys::fuzz_target;
use tfstate_diff::model::ValuePath;
use tfstate_diff::parse_provider_schemas;

/// Fuzz the provider schema parser, then classify a few paths against every
/// block that parsed.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(schemas) = parse_provider_schemas(s) {
            let paths = ["/id", "/tags/Name", "/ingress/0/from_port", "/0", ""];
            for provider in schemas.provider_schemas.values() {
                for schema in provider.resource_schemas.values() {
                    for pointer in paths {
                        let path = ValuePath::from_pointer(pointer);
                        let _ = schema.block.classify(&path);
                        let _ = schema.block.is_set(&path);
                    }
                }
            }
        }
    }
});
