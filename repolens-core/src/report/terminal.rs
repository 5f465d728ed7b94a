//! Terminal rendering of the Markdown report

use crate::analysis::RepoAnalysis;
use crate::report::markdown::MarkdownReport;
use termimad::{MadSkin, ansi};

fn report_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(ansi(117));
    skin.bold.set_fg(ansi(222));
    skin.inline_code.set_fg(ansi(151));
    skin
}

/// Render the report with ANSI styling.
///
/// With `width` set the text is wrapped to that many columns, otherwise the
/// current terminal width is used.
pub fn render_terminal(analysis: &RepoAnalysis, include_readme: bool, width: Option<usize>) -> String {
    let markdown = MarkdownReport::new(analysis)
        .include_readme(include_readme)
        .render();
    let skin = report_skin();
    match width {
        Some(width) => skin.text(&markdown, Some(width)).to_string(),
        None => skin.term_text(&markdown).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{RepoAnalyzer, RepositoryInfo};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn renders_headings_as_text() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("main.go"), "package main").unwrap();
        let analysis = RepoAnalyzer::default()
            .analyze_path(tmp.path(), RepositoryInfo::local(tmp.path()))
            .unwrap();

        let rendered = render_terminal(&analysis, true, Some(100));
        assert!(rendered.contains("Overview"));
        assert!(rendered.contains("Languages"));
        assert!(rendered.contains("main.go"));
        assert!(!rendered.contains("## Overview"));
    }
}
