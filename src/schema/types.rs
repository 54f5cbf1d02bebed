//! Serde model of the provider schema document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root of the provider schema document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSchemas {
    #[serde(default)]
    pub format_version: Option<String>,
    /// Provider source address → its schemas
    #[serde(default)]
    pub provider_schemas: IndexMap<String, ProviderSchema>,
}

/// Resource and data source schemas of one provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSchema {
    #[serde(default)]
    pub resource_schemas: IndexMap<String, ResourceSchema>,
    #[serde(default)]
    pub data_source_schemas: IndexMap<String, ResourceSchema>,
}

/// Schema of one resource or data source type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSchema {
    #[serde(default)]
    pub version: Option<u64>,
    pub block: Block,
}

/// A configuration block: attributes plus nested blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub attributes: IndexMap<String, Attribute>,
    #[serde(default)]
    pub block_types: IndexMap<String, NestedBlock>,
}

/// A nested block and how its instances repeat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedBlock {
    #[serde(default)]
    pub nesting_mode: NestingMode,
    pub block: Block,
    #[serde(default)]
    pub min_items: Option<u64>,
    #[serde(default)]
    pub max_items: Option<u64>,
}

/// How instances of a nested block are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NestingMode {
    Single,
    Group,
    #[default]
    List,
    Set,
    Map,
}

/// A leaf attribute, or a nested attribute when `nested_type` is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "type", default)]
    pub attribute_type: Option<AttributeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_type: Option<NestedAttributes>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub sensitive: bool,
}

impl Attribute {
    /// Whether the attribute's type is set-typed, or it nests its
    /// attributes in set mode.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.attribute_type.as_ref().is_some_and(AttributeType::is_set)
            || self
                .nested_type
                .as_ref()
                .is_some_and(|n| n.nesting_mode == NestingMode::Set)
    }
}

/// Object-typed attribute with its own attribute schema (`nested_type`).
///
/// Framework-based providers describe these instead of nested blocks; they
/// nest the same way but carry no `block_types`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedAttributes {
    #[serde(default)]
    pub nesting_mode: NestingMode,
    #[serde(flatten)]
    pub block: Block,
}

/// An attribute type: a primitive name (`"string"`) or a type constructor
/// (`["set", "string"]`, `["list", ["object", {...}]]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeType {
    Primitive(String),
    Constructor(Vec<Value>),
}

impl AttributeType {
    /// A set-typed attribute carries the `set` marker in its type descriptor.
    /// Only the descriptor's own elements are inspected: a list of sets is
    /// still an ordered list.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Primitive(name) => name == "set",
            Self::Constructor(parts) => parts.iter().any(|p| p.as_str() == Some("set")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attribute_type_set_marker() {
        let set: AttributeType = serde_json::from_value(json!(["set", "string"])).unwrap();
        let list: AttributeType = serde_json::from_value(json!(["list", "string"])).unwrap();
        let list_of_sets: AttributeType =
            serde_json::from_value(json!(["list", ["set", "string"]])).unwrap();
        let prim: AttributeType = serde_json::from_value(json!("string")).unwrap();

        assert!(set.is_set());
        assert!(!list.is_set());
        assert!(!list_of_sets.is_set());
        assert!(!prim.is_set());
    }

    #[test]
    fn test_deserialize_nested_block() {
        let nb: NestedBlock = serde_json::from_value(json!({
            "nesting_mode": "set",
            "block": {
                "attributes": {
                    "from_port": {"type": "number", "required": true}
                }
            },
            "min_items": 1
        }))
        .unwrap();

        assert_eq!(nb.nesting_mode, NestingMode::Set);
        assert!(nb.block.attributes["from_port"].required);
        assert!(nb.block.block_types.is_empty());
        assert_eq!(nb.min_items, Some(1));
    }

    #[test]
    fn test_deserialize_nested_attribute_type() {
        let a: Attribute = serde_json::from_value(json!({
            "nested_type": {
                "attributes": {
                    "port": {"type": "number", "required": true}
                },
                "nesting_mode": "set"
            },
            "optional": true
        }))
        .unwrap();

        let nested = a.nested_type.as_ref().unwrap();
        assert_eq!(nested.nesting_mode, NestingMode::Set);
        assert!(nested.block.attributes["port"].required);
        assert!(a.attribute_type.is_none());
        assert!(a.is_set());
    }

    #[test]
    fn test_attribute_without_type() {
        let a: Attribute = serde_json::from_value(json!({"computed": true})).unwrap();
        assert!(a.computed);
        assert!(!a.is_set());
    }
}
