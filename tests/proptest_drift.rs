//! Property-based tests for parsing, normalization and diffing.
//!
//! Parsers must reject arbitrary input without panicking, and the engine
//! must never report ordering or tag noise.

use proptest::collection::{btree_map, hash_set, vec};
use proptest::prelude::*;
use serde_json::{json, Value};
use tfstate_diff::config::IgnoreDiff;
use tfstate_diff::diff::diff_values;
use tfstate_diff::matching::rewrite_equivalent;
use tfstate_diff::schema::ProviderSchemas;
use tfstate_diff::{
    parse_provider_schemas, parse_snapshot, CanonicalAddress, DiffEngine, DriftConfig, Resource,
    SchemaIndex,
};

const AWS: &str = "registry.terraform.io/hashicorp/aws";

fn engine() -> DiffEngine {
    let schemas: ProviderSchemas = serde_json::from_value(json!({
        "provider_schemas": {
            AWS: {
                "resource_schemas": {
                    "aws_security_group": {"block": {
                        "attributes": {
                            "id": {"type": "string", "computed": true},
                            "name": {"type": "string", "optional": true},
                            "subnet_ids": {"type": ["set", "string"], "optional": true},
                            "tags": {"type": ["map", "string"], "optional": true}
                        },
                        "block_types": {
                            "ingress": {"nesting_mode": "set", "block": {"attributes": {
                                "from_port": {"type": "number", "required": true}
                            }}}
                        }
                    }}
                }
            }
        }
    }))
    .expect("schema");
    DiffEngine::new(SchemaIndex::new(schemas), &DriftConfig::default()).expect("engine")
}

fn group(values: Value) -> Resource {
    serde_json::from_value(json!({
        "address": "aws_security_group.web",
        "mode": "managed",
        "type": "aws_security_group",
        "name": "web",
        "provider_name": AWS,
        "values": values
    }))
    .expect("resource")
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9-]{0,12}".prop_map(Value::from),
    ]
}

fn value_tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..4).prop_map(Value::Array),
            btree_map("[a-z_]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

// ============================================================================
// Parsers
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn parse_snapshot_doesnt_panic(s in "\\PC{0,200}") {
        let _ = parse_snapshot(&s);
    }

    #[test]
    fn parse_provider_schemas_doesnt_panic(s in "\\PC{0,200}") {
        let _ = parse_provider_schemas(&s);
    }

    #[test]
    fn parse_snapshot_arbitrary_values(values in value_tree()) {
        let doc = json!({
            "values": {"root_module": {"resources": [{
                "address": "aws_vpc.main",
                "type": "aws_vpc",
                "values": values
            }]}}
        });
        let snapshot = parse_snapshot(&doc.to_string()).unwrap();
        prop_assert_eq!(snapshot.current().len(), 1);
    }
}

// ============================================================================
// Engine invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn set_order_never_reported(
        (ids, shuffled) in hash_set("subnet-[a-f0-9]{4}", 0..8)
            .prop_map(|s| s.into_iter().collect::<Vec<_>>())
            .prop_flat_map(|ids| (Just(ids.clone()), Just(ids).prop_shuffle())),
        (ports, shuffled_ports) in hash_set(0u16..1024, 0..6)
            .prop_map(|s| s.into_iter().collect::<Vec<_>>())
            .prop_flat_map(|p| (Just(p.clone()), Just(p).prop_shuffle())),
    ) {
        let ingress = |ports: &[u16]| -> Vec<Value> {
            ports.iter().map(|p| json!({"from_port": p})).collect()
        };
        let left = group(json!({"name": "web", "subnet_ids": ids, "ingress": ingress(&ports)}));
        let right = group(json!({
            "name": "web",
            "subnet_ids": shuffled,
            "ingress": ingress(&shuffled_ports)
        }));

        let diff = engine().compare_resources(&[left], &[right]).unwrap();
        prop_assert_eq!(diff.common, 1);
        prop_assert!(diff.resource_diffs.is_empty());
    }

    #[test]
    fn tags_never_reported(
        left_tags in btree_map("[A-Za-z]{1,8}", "[a-z0-9]{0,8}", 0..5),
        right_tags in btree_map("[A-Za-z]{1,8}", "[a-z0-9]{0,8}", 0..5),
    ) {
        let left = group(json!({"name": "web", "tags": left_tags}));
        let right = group(json!({"name": "web", "tags": right_tags}));

        let diff = engine().compare_resources(&[left], &[right]).unwrap();
        prop_assert!(diff.resource_diffs.is_empty());
    }

    #[test]
    fn self_comparison_is_clean(values in value_tree()) {
        prop_assert!(diff_values(&values, &values).is_empty());
    }
}

// ============================================================================
// Addresses and substitutions
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn canonical_address_is_idempotent(s in "[a-z_.-]{0,40}") {
        let once = CanonicalAddress::new(&s);
        let twice = CanonicalAddress::new(once.as_str());
        prop_assert_eq!(&once, &twice);
        prop_assert!(!once.as_str().contains('-'));
    }

    #[test]
    fn declared_substitution_is_equivalent(parts in vec("[a-z0-9]{0,10}", 1..5)) {
        let pairs = vec![IgnoreDiff { left: "-prod".to_string(), right: "-stg".to_string() }];
        let old = parts.join("-prod");
        let new = parts.join("-stg");
        prop_assert!(rewrite_equivalent(&old, &new, &pairs));
    }

    #[test]
    fn equivalence_without_pairs_is_equality(a in "[a-z-]{0,12}", b in "[a-z-]{0,12}") {
        prop_assert_eq!(rewrite_equivalent(&a, &b, &[]), a == b);
    }
}
