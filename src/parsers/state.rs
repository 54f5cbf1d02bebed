//! State and plan document parsing (`terraform show -json`).

use crate::error::{ErrorContext, Result};
use crate::model::{Resource, Snapshot};
use serde::Deserialize;

/// Top-level shape shared by state and plan documents.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    format_version: Option<String>,
    #[serde(default)]
    terraform_version: Option<String>,
    /// State documents
    #[serde(default)]
    values: Option<RawValues>,
    /// Plan documents
    #[serde(default)]
    prior_state: Option<RawState>,
    #[serde(default)]
    planned_values: Option<RawValues>,
}

#[derive(Debug, Deserialize)]
struct RawState {
    #[serde(default)]
    values: Option<RawValues>,
}

#[derive(Debug, Deserialize)]
struct RawValues {
    root_module: RawModule,
}

#[derive(Debug, Default, Deserialize)]
struct RawModule {
    #[serde(default)]
    resources: Vec<Resource>,
    #[serde(default)]
    child_modules: Vec<RawModule>,
}

impl RawModule {
    /// Resources of this module followed by those of its descendants.
    fn into_resources(self) -> Vec<Resource> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect(self, out: &mut Vec<Resource>) {
        out.extend(self.resources);
        for child in self.child_modules {
            child.collect(out);
        }
    }
}

fn resources(values: Option<RawValues>) -> Vec<Resource> {
    values.map_or_else(Vec::new, |v| v.root_module.into_resources())
}

/// Parse a state or plan document.
///
/// A document carrying `planned_values` is a plan; a plan without a prior
/// state has no current resources.
pub fn parse_snapshot(content: &str) -> Result<Snapshot> {
    let doc: RawDocument = serde_json::from_str(content).context("parsing state document")?;
    tracing::debug!(
        "format {} from terraform {}",
        doc.format_version.as_deref().unwrap_or("unknown"),
        doc.terraform_version.as_deref().unwrap_or("unknown")
    );

    let snapshot = match doc.planned_values {
        Some(planned) => Snapshot::Plan {
            prior: resources(doc.prior_state.and_then(|s| s.values)),
            planned: resources(Some(planned)),
        },
        None => Snapshot::State {
            resources: resources(doc.values),
        },
    };
    Ok(snapshot)
}
