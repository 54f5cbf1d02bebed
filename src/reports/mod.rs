//! Report generation for comparison results.
//!
//! The diff engine produces a [`ComparisonResult`]; rendering it is a
//! separate, stateless step:
//! - Summary: resource counts, with plan deltas when a plan was compared
//! - Detail: every reported field and policy change, then the counts
//! - JSON: the result as a single structured document

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::{DetailReporter, SummaryReporter};
pub use types::ReportFormat;

use crate::diff::ComparisonResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from a comparison result
    fn generate(&self, result: &ComparisonResult) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        result: &ComparisonResult,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(result)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => Box::new(SummaryReporter::new()),
        ReportFormat::Detail => {
            if use_color {
                Box::new(DetailReporter::new())
            } else {
                Box::new(DetailReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_formats() {
        for format in [ReportFormat::Summary, ReportFormat::Detail, ReportFormat::Json] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }

    #[test]
    fn test_write_report() {
        let mut out = Vec::new();
        JsonReporter::new()
            .pretty(false)
            .write_report(&ComparisonResult::default(), &mut out)
            .unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("{\"state_diff\""));
    }
}
