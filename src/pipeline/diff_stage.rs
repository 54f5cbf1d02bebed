//! Diff computation stage.

use super::ComparisonInputs;
use crate::config::DriftConfig;
use crate::diff::{ComparisonResult, DiffEngine, StateDiff};
use anyhow::{Context, Result};

/// Build the engine from the loaded schema and run the comparison.
pub fn compute_diff(
    inputs: ComparisonInputs,
    config: &DriftConfig,
    quiet: bool,
) -> Result<ComparisonResult> {
    let ComparisonInputs {
        schemas,
        left,
        right,
    } = inputs;

    let engine = DiffEngine::new(schemas, config).context("Invalid drift configuration")?;

    if !quiet {
        tracing::info!("Computing drift diff...");
    }
    let result = engine
        .compare(&left, &right)
        .context("Failed to compute diff")?;

    if !quiet {
        log_counts("state", &result.state_diff);
        if let Some(plan) = &result.plan_diff {
            log_counts("plan", plan);
        }
    }
    Ok(result)
}

fn log_counts(label: &str, diff: &StateDiff) {
    tracing::info!(
        "{}: {} common, {} with diff, {} left only, {} right only",
        label,
        diff.common,
        diff.resource_diffs.len(),
        diff.left_only.len(),
        diff.right_only.len()
    );
    if !diff.skipped.is_empty() {
        tracing::warn!("{}: {} resources skipped without schema", label, diff.skipped.len());
    }
}
