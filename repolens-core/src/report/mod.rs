//! Report rendering and output
//!
//! An analysis renders as Markdown (the default), pretty JSON, or Markdown
//! styled for the terminal.

pub mod markdown;
pub mod terminal;

pub use markdown::{MarkdownReport, render_markdown};
pub use terminal::render_terminal;

use crate::analysis::RepoAnalysis;
use crate::config::{ReportFormat, loader::RepolensConfig};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Pretty-printed JSON of the full analysis
pub fn render_json(analysis: &RepoAnalysis) -> Result<String> {
    serde_json::to_string_pretty(analysis).context("Failed to serialize analysis")
}

/// Render `analysis` in `format`, honoring the report settings.
///
/// `terminal_width` only applies to [`ReportFormat::Text`].
pub fn render(
    analysis: &RepoAnalysis,
    format: ReportFormat,
    config: &RepolensConfig,
    terminal_width: Option<usize>,
) -> Result<String> {
    let include_readme = !config.report.omit_readme;
    match format {
        ReportFormat::Markdown => Ok(MarkdownReport::new(analysis)
            .include_readme(include_readme)
            .render()),
        ReportFormat::Json => render_json(analysis),
        ReportFormat::Text => Ok(render_terminal(analysis, include_readme, terminal_width)),
    }
}

/// Write the report to `output`, or stdout when no path is given
pub fn write_report(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory {}", parent.display())
                })?;
            }
            let mut body = content.to_string();
            if !body.ends_with('\n') {
                body.push('\n');
            }
            fs::write(path, body)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content.trim_end()).context("Failed to write report")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{RepoAnalyzer, RepositoryInfo};
    use tempfile::TempDir;

    #[test]
    fn writes_report_and_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("reports/nested/out.md");
        write_report("# Report", Some(&target)).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "# Report\n");
    }

    #[test]
    fn json_render_is_parseable() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("app.rb"), "").unwrap();
        let analysis = RepoAnalyzer::default()
            .analyze_path(tmp.path(), RepositoryInfo::local(tmp.path()))
            .unwrap();

        let json = render(
            &analysis,
            ReportFormat::Json,
            &RepolensConfig::default(),
            None,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["main_language"], "Ruby");
        assert_eq!(value["entry_points"]["main_files"][0], "app.rb");
    }

    #[test]
    fn omit_readme_setting_applies_to_markdown() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("README.md"), "hello").unwrap();
        let analysis = RepoAnalyzer::default()
            .analyze_path(tmp.path(), RepositoryInfo::local(tmp.path()))
            .unwrap();

        let mut config = RepolensConfig::default();
        config.report.omit_readme = true;
        let markdown = render(&analysis, ReportFormat::Markdown, &config, None).unwrap();
        assert!(!markdown.contains("## README"));
    }
}
