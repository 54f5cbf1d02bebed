//! Resources and snapshots parsed from Terraform state and plan JSON.

use super::CanonicalAddress;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Whether a resource is managed or read through a data source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceMode {
    #[default]
    Managed,
    Data,
}

impl fmt::Display for ResourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Managed => write!(f, "managed"),
            Self::Data => write!(f, "data"),
        }
    }
}

/// A single declared resource and its attribute values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub address: String,
    #[serde(default)]
    pub mode: ResourceMode,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub provider_name: String,
    /// Attribute values; an object, or null for resources without values.
    #[serde(default)]
    pub values: Value,
}

impl Resource {
    /// The join key for this resource.
    #[must_use]
    pub fn canonical_address(&self) -> CanonicalAddress {
        CanonicalAddress::new(&self.address)
    }

    /// A top-level attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// The same resource with a replaced value tree.
    #[must_use]
    pub fn with_values(&self, values: Value) -> Self {
        Self {
            address: self.address.clone(),
            mode: self.mode,
            resource_type: self.resource_type.clone(),
            name: self.name.clone(),
            provider_name: self.provider_name.clone(),
            values,
        }
    }
}

/// A parsed input document.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    /// A state document: the currently recorded resources
    State { resources: Vec<Resource> },
    /// A plan document: the prior state and the planned values
    Plan {
        prior: Vec<Resource>,
        planned: Vec<Resource>,
    },
}

impl Snapshot {
    #[must_use]
    pub const fn is_plan(&self) -> bool {
        matches!(self, Self::Plan { .. })
    }

    /// Resources as they exist now: the state itself, or a plan's prior state.
    #[must_use]
    pub fn current(&self) -> &[Resource] {
        match self {
            Self::State { resources } => resources,
            Self::Plan { prior, .. } => prior,
        }
    }

    /// Resources as they will exist: a plan's planned values, or the state
    /// itself for documents that carry no plan.
    #[must_use]
    pub fn planned(&self) -> &[Resource] {
        match self {
            Self::State { resources } => resources,
            Self::Plan { planned, .. } => planned,
        }
    }
}
