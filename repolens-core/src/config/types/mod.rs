//! Shared value types used by configuration and commands

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Markdown document, suitable for pasting into a chat or README
    #[default]
    Markdown,
    /// Pretty-printed JSON of the raw analysis
    Json,
    /// Markdown rendered for the terminal
    Text,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
            ReportFormat::Text => "text",
        }
    }

    /// Suggested file extension when writing the report to disk
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
            ReportFormat::Text => "txt",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            "text" | "txt" | "terminal" => Ok(ReportFormat::Text),
            other => Err(format!(
                "unknown report format '{other}' (expected markdown, json or text)"
            )),
        }
    }
}
