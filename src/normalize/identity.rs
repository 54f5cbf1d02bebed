//! Identifier-to-address resolution.

use crate::config::IdentitySource;
use crate::model::Resource;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Attributes holding a resource's ARN. Their values map to the bare
/// canonical address.
pub const ARN_ATTRIBUTES: &[&str] = &["arn", "iam_arn"];

/// Resource types whose generated identifiers are referenced by other
/// resources, and the attribute holding the identifier.
pub const BUILTIN_IDENTITY_SOURCES: &[(&str, &str)] = &[
    ("aws_subnet", "id"),
    ("aws_security_group", "id"),
    ("aws_efs_file_system", "id"),
    ("aws_vpc", "id"),
    ("aws_vpc_endpoint", "id"),
    ("aws_service_discovery_private_dns_namespace", "id"),
    ("aws_kms_key", "key_id"),
    ("aws_route_table", "id"),
];

/// Map from identifier strings to canonical reference tokens for one
/// snapshot side.
///
/// Each side builds its own map; maps are never merged, so an identifier
/// that happens to appear on both sides resolves only within its own side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityMap {
    tokens: HashMap<String, String>,
}

impl IdentityMap {
    /// Build the map from the built-in identity table.
    #[must_use]
    pub fn build(resources: &[Resource]) -> Self {
        Self::build_with_sources(resources, &[])
    }

    /// Build the map from the built-in identity table followed by
    /// operator-supplied sources.
    ///
    /// ARNs are recorded first; identity-table entries are recorded after and
    /// win on identical identifier strings. Non-string values at identity
    /// attributes are logged and skipped.
    #[must_use]
    pub fn build_with_sources(resources: &[Resource], extra: &[IdentitySource]) -> Self {
        let mut tokens = HashMap::new();

        for resource in resources {
            let address = resource.canonical_address();
            for attr in ARN_ATTRIBUTES {
                match resource.attribute(attr) {
                    None | Some(Value::Null) => {}
                    Some(Value::String(arn)) => {
                        tokens.insert(arn.clone(), address.to_string());
                    }
                    Some(_) => {
                        tracing::warn!("{}.{} should be string", resource.address, attr);
                    }
                }
            }
        }

        let sources = BUILTIN_IDENTITY_SOURCES
            .iter()
            .map(|(t, a)| (*t, *a))
            .chain(
                extra
                    .iter()
                    .map(|s| (s.resource_type.as_str(), s.attribute.as_str())),
            );

        for (resource_type, attr) in sources {
            for resource in resources.iter().filter(|r| r.resource_type == resource_type) {
                let address = resource.canonical_address();
                match resource.attribute(attr) {
                    None | Some(Value::Null) => {}
                    Some(Value::String(id)) => {
                        tokens.insert(id.clone(), address.attribute_token(attr));
                    }
                    Some(Value::Array(ids)) => {
                        for (i, id) in ids.iter().enumerate() {
                            if let Value::String(id) = id {
                                tokens.insert(id.clone(), address.indexed_attribute_token(attr, i));
                            } else {
                                tracing::warn!(
                                    "{}.{}.{} should be string",
                                    resource.address,
                                    attr,
                                    i
                                );
                            }
                        }
                    }
                    Some(_) => {
                        tracing::warn!("{}.{} should be string", resource.address, attr);
                    }
                }
            }
        }

        tracing::debug!("collected {} identity mappings", tokens.len());
        Self { tokens }
    }

    /// The canonical token for an identifier, if known.
    #[must_use]
    pub fn resolve(&self, identifier: &str) -> Option<&str> {
        self.tokens.get(identifier).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Replace every string leaf equal to a known identifier with its token.
    #[must_use]
    pub fn normalize(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => match self.resolve(s) {
                Some(token) => Value::String(token.to_string()),
                None => value.clone(),
            },
            Value::Array(items) => Value::Array(items.iter().map(|v| self.normalize(v)).collect()),
            Value::Object(members) => Value::Object(
                members
                    .iter()
                    .map(|(k, v)| (k.clone(), self.normalize(v)))
                    .collect::<Map<String, Value>>(),
            ),
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        }
    }

    /// Normalize a resource's value tree.
    #[must_use]
    pub fn normalize_resource(&self, resource: &Resource) -> Resource {
        resource.with_values(self.normalize(&resource.values))
    }
}
