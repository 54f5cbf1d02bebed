//! Text report generators for shell output.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ComparisonResult, ResourceDiff, StateDiff};
use std::fmt::Write as _;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Signed difference between two counts.
#[allow(clippy::cast_possible_wrap)]
const fn delta(new: usize, old: usize) -> i64 {
    new as i64 - old as i64
}

/// Resource count reporter.
///
/// For a plan comparison the plan counts are shown with their change
/// relative to the state counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryReporter;

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_counts(out: &mut String, result: &ComparisonResult) -> Result<(), ReportError> {
        let state = &result.state_diff;
        let rows = |d: &StateDiff| {
            [
                ("common resources:    ", d.common),
                ("resources with diff: ", d.resource_diffs.len()),
                ("left only resources: ", d.left_only.len()),
                ("right only resources:", d.right_only.len()),
                ("skipped resources:   ", d.skipped.len()),
            ]
        };

        match &result.plan_diff {
            Some(plan) => {
                for ((label, count), (_, base)) in rows(plan).into_iter().zip(rows(state)) {
                    if label.starts_with("skipped") && count == 0 && base == 0 {
                        continue;
                    }
                    writeln!(out, "{label}{count:6} ({:+4})", delta(count, base))?;
                }
            }
            None => {
                for (label, count) in rows(state) {
                    if label.starts_with("skipped") && count == 0 {
                        continue;
                    }
                    writeln!(out, "{label}{count:6}")?;
                }
            }
        }
        Ok(())
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, result: &ComparisonResult) -> Result<String, ReportError> {
        let mut out = String::new();
        Self::write_counts(&mut out, result)?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Per-resource change listing followed by the summary counts.
pub struct DetailReporter {
    /// Use colored output
    colored: bool,
}

impl DetailReporter {
    /// Create a new detail reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn write_resource(&self, out: &mut String, diff: &ResourceDiff) -> Result<(), ReportError> {
        writeln!(out, "{}", self.color(&format!("compare {}", diff.name), "bold"))?;
        self.write_fields(out, diff, "  ")?;
        for policy in &diff.policies {
            writeln!(out, "  compare {}:", policy.name)?;
            self.write_fields(out, policy, "    ")?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn write_fields(
        &self,
        out: &mut String,
        diff: &ResourceDiff,
        indent: &str,
    ) -> Result<(), ReportError> {
        for field in &diff.fields {
            writeln!(
                out,
                "{indent}{} : {} -> {}",
                field.path,
                self.color(&field.old_value, "red"),
                self.color(&field.new_value, "green")
            )?;
        }
        Ok(())
    }

    fn write_state(&self, out: &mut String, diff: &StateDiff) -> Result<(), ReportError> {
        for resource in &diff.resource_diffs {
            self.write_resource(out, resource)?;
        }

        writeln!(out, "Left not compared:")?;
        for address in &diff.left_only {
            writeln!(out, "{address}")?;
        }
        writeln!(out)?;
        writeln!(out, "Right not compared:")?;
        for address in &diff.right_only {
            writeln!(out, "{address}")?;
        }
        writeln!(out)?;

        if !diff.skipped.is_empty() {
            writeln!(out, "Skipped without schema:")?;
            for address in &diff.skipped {
                writeln!(out, "{address}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl Default for DetailReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for DetailReporter {
    fn generate(&self, result: &ComparisonResult) -> Result<String, ReportError> {
        let mut out = String::new();
        match &result.plan_diff {
            Some(plan) => {
                writeln!(out, "{}", self.color("State diff:", "bold"))?;
                self.write_state(&mut out, &result.state_diff)?;
                writeln!(out, "{}", self.color("Plan diff:", "bold"))?;
                self.write_state(&mut out, plan)?;
            }
            None => self.write_state(&mut out, &result.state_diff)?,
        }
        SummaryReporter::write_counts(&mut out, result)?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Detail
    }
}
