use crate::config::constants::config::IGNORE_FILE_NAME;
use crate::utils::is_regular_file;
use anyhow::{Context, Result, anyhow};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Gitignore-style exclusions read from `.repolensignore` at a repository root
#[derive(Debug, Clone, Default)]
pub struct RepolensIgnore {
    /// Root directory the patterns are relative to
    root_dir: PathBuf,
    patterns: Vec<CompiledPattern>,
    /// Whether an ignore file existed and was loaded
    loaded: bool,
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    /// Globs matching the path itself
    own: Vec<Pattern>,
    /// Globs matching anything below the path
    nested: Vec<Pattern>,
    /// Trailing `/` in the source line
    dir_only: bool,
    /// Leading `!` in the source line
    negated: bool,
}

impl RepolensIgnore {
    /// Load `.repolensignore` from `root_dir`. A missing file yields an empty rule set.
    pub fn from_directory(root_dir: &Path) -> Self {
        let ignore_path = root_dir.join(IGNORE_FILE_NAME);
        let mut ignore = Self {
            root_dir: root_dir.to_path_buf(),
            ..Self::default()
        };

        if !is_regular_file(&ignore_path) {
            return ignore;
        }

        match fs::read_to_string(&ignore_path)
            .with_context(|| format!("Failed to read {}", ignore_path.display()))
            .and_then(|content| Self::parse(&content))
        {
            Ok(patterns) => {
                ignore.patterns = patterns;
                ignore.loaded = true;
            }
            Err(e) => {
                // Unusable ignore rules never abort an analysis
                warn!("Ignoring {}: {:#}", ignore_path.display(), e);
            }
        }

        ignore
    }

    /// Parse ignore file content into compiled patterns
    fn parse(content: &str) -> Result<Vec<CompiledPattern>> {
        let mut patterns = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (body, negated) = match line.strip_prefix('!') {
                Some(stripped) => (stripped, true),
                None => (line, false),
            };
            let dir_only = body.ends_with('/');
            let body = body.trim_end_matches('/');
            if body.is_empty() {
                continue;
            }

            let anchored = body.starts_with('/') || body.trim_start_matches('/').contains('/');
            let body = body.trim_start_matches('/');

            let mut own_sources = vec![body.to_string()];
            if !anchored && !body.starts_with("**/") {
                own_sources.push(format!("**/{body}"));
            }

            let compile = |source: &str| {
                Pattern::new(source).map_err(|e| {
                    anyhow!("Invalid pattern on line {}: '{}': {}", line_num + 1, line, e)
                })
            };

            let own = own_sources
                .iter()
                .map(|source| compile(source.as_str()))
                .collect::<Result<Vec<_>>>()?;
            let nested = own_sources
                .iter()
                .map(|source| compile(&format!("{source}/**")))
                .collect::<Result<Vec<_>>>()?;

            patterns.push(CompiledPattern {
                own,
                nested,
                dir_only,
                negated,
            });
        }

        Ok(patterns)
    }

    /// Decide whether `path` (absolute under the root, or already relative) is excluded
    pub fn should_exclude(&self, path: &Path, is_dir: bool) -> bool {
        if !self.loaded || self.patterns.is_empty() {
            return false;
        }

        let relative = path.strip_prefix(&self.root_dir).unwrap_or(path);
        let path_str = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if path_str.is_empty() {
            return false;
        }

        let mut excluded = false;
        for pattern in &self.patterns {
            let own_hit = pattern
                .own
                .iter()
                .any(|glob| glob.matches_with(&path_str, MATCH_OPTIONS));
            let nested_hit = pattern
                .nested
                .iter()
                .any(|glob| glob.matches_with(&path_str, MATCH_OPTIONS));

            let hit = (own_hit && (is_dir || !pattern.dir_only)) || nested_hit;
            if hit {
                excluded = !pattern.negated;
            }
        }

        excluded
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
