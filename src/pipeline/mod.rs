//! Pipeline orchestration for drift comparisons.
//!
//! Shared load → diff → report workflow for embedders that work with files
//! rather than already-parsed documents.
//!
//! ```no_run
//! use tfstate_diff::pipeline::{compare_files, load_config, output_report, OutputTarget};
//! use tfstate_diff::reports::ReportFormat;
//! use std::path::Path;
//!
//! let config = load_config(None)?;
//! let result = compare_files(
//!     Path::new("schema.json"),
//!     Path::new("prod.json"),
//!     Path::new("staging.json"),
//!     &config,
//! )?;
//! output_report(&result, ReportFormat::Detail, &OutputTarget::Stdout, false)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::compute_diff;
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{load_inputs, ComparisonInputs};
pub use report_stage::output_report;

use crate::config::{file, DriftConfig};
use crate::diff::ComparisonResult;
use anyhow::{Context, Result};
use std::path::Path;

/// Load the operator configuration.
///
/// An explicitly named file must load; otherwise the standard locations are
/// searched and a broken discovered file falls back to the defaults.
pub fn load_config(explicit_path: Option<&Path>) -> Result<DriftConfig> {
    match explicit_path {
        Some(path) => {
            let config = file::load_config_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            tracing::info!("Using config {:?}", path);
            Ok(config)
        }
        None => {
            let (config, found) = file::load_or_default(None);
            if let Some(path) = found {
                tracing::info!("Using config {:?}", path);
            }
            Ok(config)
        }
    }
}

/// Compare two state or plan files against a provider schema file.
pub fn compare_files(
    schema_path: &Path,
    left_path: &Path,
    right_path: &Path,
    config: &DriftConfig,
) -> Result<ComparisonResult> {
    let inputs = load_inputs(schema_path, left_path, right_path, false)?;
    compute_diff(inputs, config, false)
}
