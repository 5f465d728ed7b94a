//! Language detection by file extension

use crate::analysis::walker::RepoFile;
use indexmap::IndexMap;
use serde::Serialize;

/// Reported when no recognised source file exists
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Extension table. Order matters: the first matching language wins, so `.h`
/// is attributed to C++, and earlier entries win ties for the main language.
pub const LANGUAGE_EXTENSIONS: &[(&str, &[&str])] = &[
    ("Python", &["py"]),
    ("JavaScript", &["js", "jsx", "mjs"]),
    ("TypeScript", &["ts", "tsx"]),
    ("Java", &["java"]),
    ("Go", &["go"]),
    ("Rust", &["rs"]),
    ("C++", &["cpp", "cc", "cxx", "hpp", "h"]),
    ("C", &["c", "h"]),
    ("Ruby", &["rb"]),
    ("Swift", &["swift"]),
    ("Kotlin", &["kt", "kts"]),
    ("PHP", &["php"]),
    ("C#", &["cs"]),
    ("Scala", &["scala"]),
];

/// Map a lowercase extension (without dot) to a language name
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    LANGUAGE_EXTENSIONS
        .iter()
        .find(|(_, extensions)| extensions.contains(&extension))
        .map(|(language, _)| *language)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    /// Files per language, in extension-table order
    #[serde(rename = "languages")]
    pub counts: IndexMap<String, usize>,
    pub main_language: String,
    /// Every file visited, recognised or not
    pub total_files: usize,
}

impl LanguageStats {
    /// Number of files attributed to any language
    pub fn source_files(&self) -> usize {
        self.counts.values().sum()
    }

    /// Percentage of recognised source files written in `language`
    pub fn share(&self, language: &str) -> f64 {
        let total = self.source_files();
        if total == 0 {
            return 0.0;
        }
        let count = self.counts.get(language).copied().unwrap_or(0);
        count as f64 * 100.0 / total as f64
    }

    /// Languages ordered by file count, most common first
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(language, count)| (language.as_str(), *count))
            .collect();
        // stable sort keeps table order for equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

pub fn detect_languages(files: &[RepoFile]) -> LanguageStats {
    let mut tallies = vec![0usize; LANGUAGE_EXTENSIONS.len()];

    for file in files {
        let Some(extension) = file.extension() else {
            continue;
        };
        if let Some(index) = LANGUAGE_EXTENSIONS
            .iter()
            .position(|(_, extensions)| extensions.contains(&extension.as_str()))
        {
            tallies[index] += 1;
        }
    }

    let counts: IndexMap<String, usize> = LANGUAGE_EXTENSIONS
        .iter()
        .zip(tallies)
        .filter(|(_, count)| *count > 0)
        .map(|((language, _), count)| (language.to_string(), count))
        .collect();

    let main_language = counts
        .iter()
        .fold(None::<(&String, usize)>, |best, (language, count)| match best {
            Some((_, best_count)) if best_count >= *count => best,
            _ => Some((language, *count)),
        })
        .map(|(language, _)| language.clone())
        .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());

    LanguageStats {
        counts,
        main_language,
        total_files: files.len(),
    }
}
