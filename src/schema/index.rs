//! Schema lookup and path classification.

use super::types::{Block, NestingMode, ProviderSchemas, ResourceSchema};
use crate::error::{Result, SchemaErrorKind, StateDiffError};
use crate::model::{PathSegment, Resource, ResourceMode, ValuePath};

/// How a value path relates to user configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// A value the operator is expected to have set explicitly
    Argument,
    /// A value computed by the provider; drift here is noise
    Computed,
}

impl PathClass {
    #[must_use]
    pub const fn is_argument(self) -> bool {
        matches!(self, Self::Argument)
    }
}

impl From<bool> for PathClass {
    fn from(is_argument: bool) -> Self {
        if is_argument {
            Self::Argument
        } else {
            Self::Computed
        }
    }
}

/// Queryable index over all provider schemas.
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex {
    schemas: ProviderSchemas,
}

impl SchemaIndex {
    #[must_use]
    pub const fn new(schemas: ProviderSchemas) -> Self {
        Self { schemas }
    }

    /// Find the schema of a resource or data source type.
    #[must_use]
    pub fn lookup_type(
        &self,
        provider: &str,
        resource_type: &str,
        mode: ResourceMode,
    ) -> Option<&ResourceSchema> {
        let provider = self.schemas.provider_schemas.get(provider)?;
        match mode {
            ResourceMode::Managed => provider.resource_schemas.get(resource_type),
            ResourceMode::Data => provider.data_source_schemas.get(resource_type),
        }
    }

    /// Find the root block for a resource.
    ///
    /// A missing schema is a configuration error: the resource cannot be
    /// classified, so it cannot be compared.
    pub fn lookup(&self, resource: &Resource) -> Result<&Block> {
        self.lookup_type(&resource.provider_name, &resource.resource_type, resource.mode)
            .map(|s| &s.block)
            .ok_or_else(|| {
                StateDiffError::schema(
                    "resolving resource schema",
                    SchemaErrorKind::NotFound {
                        address: resource.address.clone(),
                        provider: resource.provider_name.clone(),
                        resource_type: resource.resource_type.clone(),
                        mode: resource.mode.to_string(),
                    },
                )
            })
    }
}

impl Block {
    /// Classify a path as argument or computed.
    ///
    /// A leaf attribute is an argument when it is not computed or is optional
    /// (optional+computed attributes are user-settable). Attributes named
    /// `id`, at any depth, ignore the optional flag and are arguments only
    /// when not computed. A path that stops at a nested block, or at one of
    /// its instances, is treated as an argument. Paths below a nested
    /// attribute instance are classified by its own attribute schema.
    pub fn classify(&self, path: &ValuePath) -> Result<PathClass> {
        self.classify_segments(path.segments(), path)
    }

    /// Whether the path addresses a set-typed collection.
    ///
    /// Only a path that ends exactly at a set-typed attribute or a
    /// set-nested block qualifies. Elements of a set attribute carry no
    /// schema of their own, so paths below one are never sets; nested
    /// attributes and nested blocks are the exception.
    pub fn is_set(&self, path: &ValuePath) -> Result<bool> {
        self.is_set_segments(path.segments(), path)
    }

    fn classify_segments(&self, segments: &[PathSegment], full: &ValuePath) -> Result<PathClass> {
        let Some((head, rest)) = segments.split_first() else {
            return Ok(PathClass::Argument);
        };
        let name = head.as_key().ok_or_else(|| attribute_not_found(full))?;

        if let Some(attr) = self.attributes.get(name) {
            if let Some(nested) = &attr.nested_type {
                let inner = skip_instance(nested.nesting_mode, rest);
                if !inner.is_empty() {
                    return nested.block.classify_segments(inner, full);
                }
            }
            let is_argument = if name == "id" {
                !attr.computed
            } else {
                !attr.computed || attr.optional
            };
            return Ok(is_argument.into());
        }

        if let Some(nested) = self.block_types.get(name) {
            let inner = skip_instance(nested.nesting_mode, rest);
            if inner.is_empty() {
                return Ok(PathClass::Argument);
            }
            return nested.block.classify_segments(inner, full);
        }

        Err(attribute_not_found(full))
    }

    fn is_set_segments(&self, segments: &[PathSegment], full: &ValuePath) -> Result<bool> {
        let Some((head, rest)) = segments.split_first() else {
            return Ok(false);
        };
        let name = head.as_key().ok_or_else(|| attribute_not_found(full))?;

        if let Some(attr) = self.attributes.get(name) {
            if rest.is_empty() {
                return Ok(attr.is_set());
            }
            let Some(nested) = &attr.nested_type else {
                return Ok(false);
            };
            let inner = skip_instance(nested.nesting_mode, rest);
            if inner.is_empty() {
                return Ok(false);
            }
            return nested.block.is_set_segments(inner, full);
        }

        if let Some(nested) = self.block_types.get(name) {
            if rest.is_empty() {
                return Ok(nested.nesting_mode == NestingMode::Set);
            }
            let inner = skip_instance(nested.nesting_mode, rest);
            if inner.is_empty() {
                // a single block instance is an object, never a collection
                return Ok(false);
            }
            return nested.block.is_set_segments(inner, full);
        }

        Err(attribute_not_found(full))
    }
}

/// Step over the segment that selects one instance of a repeated block.
///
/// List and set instances are selected by index, map instances by key.
/// Single and group blocks are stored as a plain object, but some state
/// serializations wrap them in a one-element list, so an index is skipped
/// for them too.
fn skip_instance(mode: NestingMode, rest: &[PathSegment]) -> &[PathSegment] {
    match rest.first() {
        Some(PathSegment::Index(_)) => &rest[1..],
        Some(PathSegment::Key(_)) if mode == NestingMode::Map => &rest[1..],
        _ => rest,
    }
}

fn attribute_not_found(path: &ValuePath) -> StateDiffError {
    StateDiffError::schema(
        "classifying value path",
        SchemaErrorKind::AttributeNotFound {
            path: path.to_pointer(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn instance_block() -> Block {
        serde_json::from_value(json!({
            "attributes": {
                "id": {"type": "string", "optional": true, "computed": true},
                "ami": {"type": "string", "required": true},
                "arn": {"type": "string", "computed": true},
                "instance_type": {"type": "string", "optional": true, "computed": true},
                "security_groups": {"type": ["set", "string"], "optional": true, "computed": true},
                "tags": {"type": ["map", "string"], "optional": true},
                "listeners": {
                    "nested_type": {
                        "nesting_mode": "set",
                        "attributes": {
                            "port": {"type": "number", "required": true},
                            "arn": {"type": "string", "computed": true},
                            "cidrs": {"type": ["set", "string"], "optional": true}
                        }
                    },
                    "optional": true
                },
                "endpoint": {
                    "nested_type": {
                        "nesting_mode": "single",
                        "attributes": {
                            "address": {"type": "string", "computed": true}
                        }
                    },
                    "computed": true
                }
            },
            "block_types": {
                "ebs_block_device": {
                    "nesting_mode": "set",
                    "block": {
                        "attributes": {
                            "device_name": {"type": "string", "required": true},
                            "volume_id": {"type": "string", "computed": true},
                            "id": {"type": "string", "computed": true}
                        }
                    }
                },
                "root_block_device": {
                    "nesting_mode": "list",
                    "max_items": 1,
                    "block": {
                        "attributes": {
                            "volume_size": {"type": "number", "optional": true, "computed": true},
                            "throughput": {"type": "number", "computed": true},
                            "id": {"type": "string", "required": true}
                        },
                        "block_types": {
                            "grants": {
                                "nesting_mode": "set",
                                "block": {"attributes": {
                                    "grantee": {"type": "string", "required": true}
                                }}
                            }
                        }
                    }
                },
                "timeouts": {
                    "nesting_mode": "single",
                    "block": {"attributes": {"create": {"type": "string", "optional": true}}}
                },
                "labels": {
                    "nesting_mode": "map",
                    "block": {"attributes": {"value": {"type": "string", "computed": true}}}
                }
            }
        }))
        .unwrap()
    }

    fn classify(path: &str) -> PathClass {
        instance_block()
            .classify(&ValuePath::from_pointer(path))
            .unwrap()
    }

    fn is_set(path: &str) -> bool {
        instance_block()
            .is_set(&ValuePath::from_pointer(path))
            .unwrap()
    }

    #[test]
    fn test_required_attribute_is_argument() {
        assert_eq!(classify("/ami"), PathClass::Argument);
    }

    #[test]
    fn test_computed_only_is_not_argument() {
        assert_eq!(classify("/arn"), PathClass::Computed);
    }

    #[test]
    fn test_optional_computed_is_argument() {
        assert_eq!(classify("/instance_type"), PathClass::Argument);
    }

    #[test]
    fn test_id_ignores_optional_flag() {
        assert_eq!(classify("/id"), PathClass::Computed);
        // nested `id` attributes follow the same rule
        assert_eq!(classify("/ebs_block_device/0/id"), PathClass::Computed);
        assert_eq!(classify("/root_block_device/0/id"), PathClass::Argument);
    }

    #[test]
    fn test_paths_below_attribute_follow_attribute() {
        assert_eq!(classify("/tags/Name"), PathClass::Argument);
        assert_eq!(classify("/security_groups/1"), PathClass::Argument);
    }

    #[test]
    fn test_nested_block_presence_is_argument() {
        assert_eq!(classify("/ebs_block_device"), PathClass::Argument);
        assert_eq!(classify("/ebs_block_device/2"), PathClass::Argument);
    }

    #[test]
    fn test_nested_block_attributes() {
        assert_eq!(classify("/ebs_block_device/0/device_name"), PathClass::Argument);
        assert_eq!(classify("/ebs_block_device/0/volume_id"), PathClass::Computed);
        assert_eq!(classify("/root_block_device/0/volume_size"), PathClass::Argument);
        assert_eq!(classify("/root_block_device/0/throughput"), PathClass::Computed);
        assert_eq!(
            classify("/root_block_device/0/grants/1/grantee"),
            PathClass::Argument
        );
    }

    #[test]
    fn test_single_and_map_nesting() {
        assert_eq!(classify("/timeouts/create"), PathClass::Argument);
        assert_eq!(classify("/labels/blue/value"), PathClass::Computed);
    }

    #[test]
    fn test_missing_attribute_is_fatal() {
        let err = instance_block()
            .classify(&ValuePath::from_pointer("/ebs_block_device/0/nope"))
            .unwrap_err();
        assert_eq!(
            err.schema_kind(),
            Some(&SchemaErrorKind::AttributeNotFound {
                path: "/ebs_block_device/0/nope".to_string()
            })
        );
    }

    #[test]
    fn test_set_attribute_only_at_termination() {
        assert!(is_set("/security_groups"));
        assert!(!is_set("/security_groups/0"));
        assert!(!is_set("/tags"));
        assert!(!is_set("/ami"));
    }

    #[test]
    fn test_set_nested_blocks() {
        assert!(is_set("/ebs_block_device"));
        assert!(!is_set("/ebs_block_device/0"));
        assert!(!is_set("/root_block_device"));
        assert!(is_set("/root_block_device/0/grants"));
        assert!(!is_set("/timeouts"));
    }

    #[test]
    fn test_nested_attribute_types() {
        assert_eq!(classify("/listeners"), PathClass::Argument);
        assert_eq!(classify("/listeners/0"), PathClass::Argument);
        assert_eq!(classify("/listeners/0/port"), PathClass::Argument);
        assert_eq!(classify("/listeners/0/arn"), PathClass::Computed);
        assert_eq!(classify("/endpoint"), PathClass::Computed);
        assert_eq!(classify("/endpoint/address"), PathClass::Computed);

        assert!(is_set("/listeners"));
        assert!(!is_set("/listeners/0"));
        assert!(is_set("/listeners/0/cidrs"));
        assert!(!is_set("/endpoint"));
        assert!(!is_set("/endpoint/address"));
    }

    #[test]
    fn test_nested_attribute_unknown_member_is_fatal() {
        assert!(instance_block()
            .classify(&ValuePath::from_pointer("/listeners/0/nope"))
            .is_err());
    }

    #[test]
    fn test_is_set_missing_attribute_is_fatal() {
        assert!(instance_block()
            .is_set(&ValuePath::from_pointer("/unknown"))
            .is_err());
    }

    #[test]
    fn test_lookup_by_mode() {
        let schemas: ProviderSchemas = serde_json::from_value(json!({
            "format_version": "1.0",
            "provider_schemas": {
                "registry.terraform.io/hashicorp/aws": {
                    "resource_schemas": {"aws_vpc": {"version": 1, "block": {}}},
                    "data_source_schemas": {"aws_ami": {"version": 0, "block": {}}}
                }
            }
        }))
        .unwrap();
        let index = SchemaIndex::new(schemas);
        let provider = "registry.terraform.io/hashicorp/aws";

        assert!(index.lookup_type(provider, "aws_vpc", ResourceMode::Managed).is_some());
        assert!(index.lookup_type(provider, "aws_vpc", ResourceMode::Data).is_none());
        assert!(index.lookup_type(provider, "aws_ami", ResourceMode::Data).is_some());

        let resource: Resource = serde_json::from_value(json!({
            "address": "aws_subnet.a",
            "mode": "managed",
            "type": "aws_subnet",
            "provider_name": provider
        }))
        .unwrap();
        let err = index.lookup(&resource).unwrap_err();
        match err.schema_kind() {
            Some(SchemaErrorKind::NotFound { address, .. }) => assert_eq!(address, "aws_subnet.a"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
