//! Markdown architecture report

use crate::analysis::RepoAnalysis;
use crate::analysis::walker::ROOT_KEY;

const NONE_DETECTED: &str = "_None detected._";

/// Builds the Markdown document section by section
pub struct MarkdownReport<'a> {
    analysis: &'a RepoAnalysis,
    include_readme: bool,
    out: String,
}

impl<'a> MarkdownReport<'a> {
    pub fn new(analysis: &'a RepoAnalysis) -> Self {
        Self {
            analysis,
            include_readme: true,
            out: String::new(),
        }
    }

    pub fn include_readme(mut self, include: bool) -> Self {
        self.include_readme = include;
        self
    }

    pub fn render(mut self) -> String {
        self.title();
        self.overview();
        self.languages();
        self.tech_stack();
        self.structure();
        self.entry_points();
        self.api_files();
        if self.include_readme {
            self.readme();
        }
        self.out
    }

    /// Copy of the borrowed analysis, so section data can outlive `&mut self`
    fn analysis_ref(&self) -> &'a RepoAnalysis {
        self.analysis
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn heading(&mut self, title: &str) {
        self.line(&format!("## {title}"));
        self.line("");
    }

    fn bullets(&mut self, items: &[String]) {
        if items.is_empty() {
            self.line(NONE_DETECTED);
        } else {
            for item in items {
                self.line(&format!("- `{item}`"));
            }
        }
        self.line("");
    }

    fn title(&mut self) {
        let name = &self.analysis_ref().repository.name;
        self.line(&format!("# Repository Analysis: {name}"));
        self.line("");
    }

    fn overview(&mut self) {
        let analysis = self.analysis_ref();
        let repo = &analysis.repository;
        self.heading("Overview");

        self.line(&format!("- **Source:** {}", repo.source));
        if let Some(web_url) = &repo.web_url {
            self.line(&format!("- **Web:** {web_url}"));
        }
        if let Some(branch) = &repo.branch {
            self.line(&format!("- **Branch:** `{branch}`"));
        }
        self.line(&format!(
            "- **Main language:** {}",
            analysis.languages.main_language
        ));
        self.line(&format!(
            "- **Total files:** {}",
            analysis.languages.total_files
        ));
        if let Some(summary) = analysis.readme.as_ref().and_then(|r| r.summary()) {
            self.line(&format!("- **Summary:** {summary}"));
        }
        self.line(&format!(
            "- **Generated:** {}",
            analysis.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        self.line("");
    }

    fn languages(&mut self) {
        let stats = &self.analysis_ref().languages;
        self.heading("Languages");

        let ranked = stats.ranked();
        if ranked.is_empty() {
            self.line(NONE_DETECTED);
            self.line("");
            return;
        }

        self.line("| Language | Files | Share |");
        self.line("|----------|------:|------:|");
        for (language, count) in ranked {
            self.line(&format!(
                "| {language} | {count} | {:.1}% |",
                stats.share(language)
            ));
        }
        self.line("");
    }

    fn tech_stack(&mut self) {
        let stack = &self.analysis_ref().tech_stack;
        self.heading("Tech Stack");

        if stack.is_empty() {
            self.line(NONE_DETECTED);
            self.line("");
            return;
        }

        for (label, items, code) in [
            ("Frameworks", &stack.frameworks, false),
            ("Build tools", &stack.build_tools, false),
            ("Dependencies", &stack.dependencies, true),
        ] {
            let joined = if items.is_empty() {
                NONE_DETECTED.to_string()
            } else if code {
                items
                    .iter()
                    .map(|item| format!("`{item}`"))
                    .collect::<Vec<_>>()
                    .join(", ")
            } else {
                items.join(", ")
            };
            self.line(&format!("- **{label}:** {joined}"));
        }
        self.line("");
    }

    fn structure(&mut self) {
        let structure = &self.analysis_ref().structure;
        self.heading("Project Structure");

        if structure.is_empty() {
            self.line(NONE_DETECTED);
            self.line("");
            return;
        }

        for (directory, files) in structure {
            let label = if directory == ROOT_KEY {
                "(root)".to_string()
            } else {
                format!("`{directory}/`")
            };
            let listed = files
                .iter()
                .map(|file| format!("`{file}`"))
                .collect::<Vec<_>>()
                .join(", ");
            self.line(&format!("- {label}: {listed}"));
        }
        self.line("");
    }

    fn entry_points(&mut self) {
        let entry_points = &self.analysis_ref().entry_points;
        self.heading("Entry Points");

        self.line("### Main files");
        self.line("");
        self.bullets(&entry_points.main_files);
        self.line("### Configuration files");
        self.line("");
        self.bullets(&entry_points.config_files);
        self.line("### Test files");
        self.line("");
        self.bullets(&entry_points.test_files);
    }

    fn api_files(&mut self) {
        self.heading("API Files");
        let files = &self.analysis_ref().api_files;
        self.bullets(files);
    }

    fn readme(&mut self) {
        self.heading("README");

        let Some(readme) = &self.analysis_ref().readme else {
            self.line(NONE_DETECTED);
            self.line("");
            return;
        };

        let note = if readme.truncated { " (truncated)" } else { "" };
        self.line(&format!("Excerpt from `{}`{note}:", readme.file));
        self.line("");

        let fence = fence_for(&readme.content);
        self.line(&format!("{fence}markdown"));
        self.line(readme.content.trim_end());
        self.line(&fence);
    }
}

/// Render the full report, README excerpt included
pub fn render_markdown(analysis: &RepoAnalysis) -> String {
    MarkdownReport::new(analysis).render()
}

/// A backtick fence longer than any backtick run inside `content`
fn fence_for(content: &str) -> String {
    let mut longest = 0;
    let mut current = 0;
    for ch in content.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    "`".repeat(longest.max(2) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{RepoAnalyzer, RepositoryInfo};
    use std::fs;
    use tempfile::TempDir;

    fn analyze(tmp: &TempDir) -> RepoAnalysis {
        RepoAnalyzer::default()
            .analyze_path(tmp.path(), RepositoryInfo::local(tmp.path()))
            .unwrap()
    }

    #[test]
    fn empty_repository_reports_every_section() {
        let tmp = TempDir::new().unwrap();
        let report = render_markdown(&analyze(&tmp));

        for header in [
            "# Repository Analysis:",
            "## Overview",
            "## Languages",
            "## Tech Stack",
            "## Project Structure",
            "## Entry Points",
            "## API Files",
            "## README",
        ] {
            assert!(report.contains(header), "missing {header}");
        }
        assert!(report.contains("- **Main language:** Unknown"));
        assert!(report.matches(NONE_DETECTED).count() >= 7);
    }

    #[test]
    fn languages_table_and_readme_excerpt() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("src/main.rs"), "fn main() {}").unwrap();
        fs::write(tmp.path().join("src/lib.rs"), "").unwrap();
        fs::write(tmp.path().join("build.py"), "").unwrap();
        fs::write(
            tmp.path().join("README.md"),
            "# Demo\n\nSmall demo.\n\n```sh\ncargo run\n```\n",
        )
        .unwrap();

        let report = render_markdown(&analyze(&tmp));
        assert!(report.contains("| Rust | 2 | 66.7% |"));
        assert!(report.contains("| Python | 1 | 33.3% |"));
        assert!(report.contains("- **Summary:** Small demo."));
        assert!(report.contains("- `src/`: `lib.rs`, `main.rs`"));
        assert!(report.contains("Excerpt from `README.md`:"));
        assert!(report.contains("````markdown\n# Demo"));
    }

    #[test]
    fn readme_can_be_left_out() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("README.md"), "hello").unwrap();
        let analysis = analyze(&tmp);
        let report = MarkdownReport::new(&analysis).include_readme(false).render();
        assert!(!report.contains("## README"));
    }

    #[test]
    fn fence_outgrows_content() {
        assert_eq!(fence_for("plain"), "```");
        assert_eq!(fence_for("```rust\n```"), "````");
    }
}
