//! Entry point, configuration and test file discovery by file name

use crate::analysis::walker::RepoFile;
use serde::Serialize;
use std::collections::BTreeSet;

const MAIN_PATTERNS: &[&str] = &["main", "app", "index", "server", "cli", "run"];
const MAIN_SUFFIXES: &[&str] = &[".py", ".js", ".ts", ".go", ".rs", ".java", ".rb", ".sh"];

const CONFIG_PATTERNS: &[&str] = &["config", "settings", ".env", "setup"];
const CONFIG_NAMES: &[&str] = &[
    "package.json",
    "requirements.txt",
    "Cargo.toml",
    "go.mod",
    "pom.xml",
    "build.gradle",
    "Makefile",
    "Dockerfile",
];

const TEST_PATTERNS: &[&str] = &["test", "spec", "__tests__"];
const TEST_SUFFIXES: &[&str] = &[
    ".test.js", ".test.ts", ".spec.js", ".spec.ts", "_test.py", "_test.go",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryPoints {
    pub main_files: Vec<String>,
    pub config_files: Vec<String>,
    pub test_files: Vec<String>,
}

/// Per-category caps
#[derive(Debug, Clone, Copy)]
pub struct EntryPointLimits {
    pub main_files: usize,
    pub config_files: usize,
    pub test_files: usize,
}

pub fn is_main_file(name: &str) -> bool {
    let lowered = name.to_lowercase();
    MAIN_PATTERNS.iter().any(|p| lowered.contains(p))
        && MAIN_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

pub fn is_config_file(name: &str) -> bool {
    let lowered = name.to_lowercase();
    CONFIG_PATTERNS.iter().any(|p| lowered.contains(p)) || CONFIG_NAMES.contains(&name)
}

pub fn is_test_file(name: &str) -> bool {
    let lowered = name.to_lowercase();
    TEST_PATTERNS.iter().any(|p| lowered.contains(p))
        || TEST_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Classify every non-hidden file; one file may land in several categories
pub fn find_entry_points(files: &[RepoFile], limits: EntryPointLimits) -> EntryPoints {
    let mut main_files = BTreeSet::new();
    let mut config_files = BTreeSet::new();
    let mut test_files = BTreeSet::new();

    for file in files.iter().filter(|file| !file.is_hidden()) {
        if is_main_file(&file.name) {
            main_files.insert(file.display_path());
        }
        if is_config_file(&file.name) {
            config_files.insert(file.display_path());
        }
        if is_test_file(&file.name) {
            test_files.insert(file.display_path());
        }
    }

    EntryPoints {
        main_files: main_files.into_iter().take(limits.main_files).collect(),
        config_files: config_files.into_iter().take(limits.config_files).collect(),
        test_files: test_files.into_iter().take(limits.test_files).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: EntryPointLimits = EntryPointLimits {
        main_files: 10,
        config_files: 15,
        test_files: 10,
    };

    fn files(paths: &[&str]) -> Vec<RepoFile> {
        paths.iter().map(|p| RepoFile::new(*p)).collect()
    }

    #[test]
    fn classifies_by_name() {
        let found = find_entry_points(
            &files(&[
                "src/main.rs",
                "server/app.ts",
                "scripts/run.sh",
                "docs/index.html",
                "config/settings.yaml",
                "Dockerfile",
                "tests/parser_test.go",
                "web/button.spec.ts",
                ".env.example",
            ]),
            LIMITS,
        );

        assert_eq!(
            found.main_files,
            vec!["scripts/run.sh", "server/app.ts", "src/main.rs"]
        );
        assert_eq!(found.config_files, vec!["Dockerfile", "config/settings.yaml"]);
        assert_eq!(
            found.test_files,
            vec!["tests/parser_test.go", "web/button.spec.ts"]
        );
    }

    #[test]
    fn one_file_can_match_several_categories() {
        let found = find_entry_points(&files(&["tests/test_app.py"]), LIMITS);
        assert_eq!(found.main_files, vec!["tests/test_app.py"]);
        assert_eq!(found.test_files, vec!["tests/test_app.py"]);
    }

    #[test]
    fn respects_caps() {
        let many: Vec<String> = (0..30).map(|i| format!("cmd/main_{i:02}.go")).collect();
        let refs: Vec<&str> = many.iter().map(String::as_str).collect();
        let found = find_entry_points(&files(&refs), LIMITS);
        assert_eq!(found.main_files.len(), 10);
        assert_eq!(found.main_files[0], "cmd/main_00.go");
    }
}
