//! Report output stage.

use super::{should_use_color, write_output, OutputTarget};
use crate::diff::ComparisonResult;
use crate::reports::{create_reporter_with_options, ReportFormat};
use anyhow::Result;

/// Render a comparison result and write it to the target.
pub fn output_report(
    result: &ComparisonResult,
    format: ReportFormat,
    target: &OutputTarget,
    quiet: bool,
) -> Result<()> {
    let reporter = create_reporter_with_options(format, should_use_color(target));
    let report = reporter.generate(result)?;
    write_output(&report, target, quiet)
}
