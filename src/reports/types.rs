//! Report type definitions.

use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Resource counts only
    #[default]
    Summary,
    /// Every reported change, then the counts
    Detail,
    /// Structured JSON output
    Json,
}

impl ReportFormat {
    /// Parse a format name. Returns None for unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "summary" => Some(Self::Summary),
            "detail" | "verbose" => Some(Self::Detail),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Detail => write!(f, "detail"),
            Self::Json => write!(f, "json"),
        }
    }
}
