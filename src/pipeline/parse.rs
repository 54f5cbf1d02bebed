//! Input loading stage.

use crate::model::Snapshot;
use crate::parsers::{load_provider_schemas, load_snapshot};
use crate::schema::SchemaIndex;
use anyhow::{Context, Result};
use std::path::Path;

/// Everything a comparison reads from disk.
#[derive(Debug, Clone)]
pub struct ComparisonInputs {
    pub schemas: SchemaIndex,
    pub left: Snapshot,
    pub right: Snapshot,
}

/// Load the provider schema and both snapshots.
pub fn load_inputs(
    schema_path: &Path,
    left_path: &Path,
    right_path: &Path,
    quiet: bool,
) -> Result<ComparisonInputs> {
    if !quiet {
        tracing::info!("Loading provider schema: {:?}", schema_path);
    }
    let schemas = load_provider_schemas(schema_path)
        .with_context(|| format!("Failed to load provider schema: {}", schema_path.display()))?;
    if !quiet {
        tracing::info!(
            "Loaded schemas for {} providers",
            schemas.provider_schemas.len()
        );
    }

    let left = load_side(left_path, "left", quiet)?;
    let right = load_side(right_path, "right", quiet)?;

    Ok(ComparisonInputs {
        schemas: SchemaIndex::new(schemas),
        left,
        right,
    })
}

fn load_side(path: &Path, side: &str, quiet: bool) -> Result<Snapshot> {
    if !quiet {
        tracing::info!("Loading {} snapshot: {:?}", side, path);
    }
    let snapshot = load_snapshot(path)
        .with_context(|| format!("Failed to load {side} snapshot: {}", path.display()))?;
    if !quiet {
        tracing::info!(
            "{} {}: {} resources{}",
            side,
            if snapshot.is_plan() { "plan" } else { "state" },
            snapshot.current().len(),
            if snapshot.is_plan() {
                format!(", {} planned", snapshot.planned().len())
            } else {
                String::new()
            }
        );
    }
    Ok(snapshot)
}
