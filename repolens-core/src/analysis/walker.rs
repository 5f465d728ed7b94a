//! Single-pass filtered traversal of a repository checkout

use crate::config::AnalysisConfig;
use crate::utils::repolensignore::RepolensIgnore;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Key used for the repository root in per-directory views. No relative
/// directory path can produce it, so a top-level `root/` keeps its own entry.
pub const ROOT_KEY: &str = ".";

/// A regular file found during the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoFile {
    /// Path relative to the repository root
    pub relative: PathBuf,
    /// File name component
    pub name: String,
}

impl RepoFile {
    pub fn new(relative: impl Into<PathBuf>) -> Self {
        let relative = relative.into();
        let name = relative
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { relative, name }
    }

    /// Dotfiles such as `.env` or `.eslintrc.js`
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Lowercased extension without the dot
    pub fn extension(&self) -> Option<String> {
        self.relative
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }

    /// Relative path with `/` separators on every platform
    pub fn display_path(&self) -> String {
        slash_join(&self.relative)
    }
}

/// Everything the analyzers need from one traversal
#[derive(Debug, Clone, Default)]
pub struct RepoSnapshot {
    root: PathBuf,
    files: Vec<RepoFile>,
    /// Directory key -> names of the files it directly contains, in traversal order
    directories: IndexMap<String, Vec<String>>,
}

impl RepoSnapshot {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[RepoFile] {
        &self.files
    }

    pub fn directories(&self) -> &IndexMap<String, Vec<String>> {
        &self.directories
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Walks a repository, pruning hidden directories, the configured skip list and
/// anything matched by `.repolensignore`
pub struct RepoWalker {
    root: PathBuf,
    skip_dirs: HashSet<String>,
    ignore: RepolensIgnore,
}

impl RepoWalker {
    pub fn new(root: impl Into<PathBuf>, config: &AnalysisConfig) -> Self {
        let root = root.into();
        let ignore = if config.use_ignore_file {
            RepolensIgnore::from_directory(&root)
        } else {
            RepolensIgnore::default()
        };
        if ignore.is_loaded() {
            debug!("Loaded {} ignore patterns", ignore.pattern_count());
        }

        Self {
            root,
            skip_dirs: config.skip_dirs.iter().cloned().collect(),
            ignore,
        }
    }

    fn keep_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().is_dir();
        if is_dir {
            let name = entry.file_name().to_string_lossy();
            if name.starts_with('.') || self.skip_dirs.contains(&*name) {
                return false;
            }
        }
        !self.ignore.should_exclude(entry.path(), is_dir)
    }

    /// Traverse once, sorted by name, without following symlinks
    pub fn snapshot(&self) -> RepoSnapshot {
        let mut files = Vec::new();
        let mut directories: IndexMap<String, Vec<String>> = IndexMap::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.keep_entry(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            let relative = match entry.path().strip_prefix(&self.root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => continue,
            };

            if entry.file_type().is_dir() {
                directories.entry(directory_key(&relative)).or_default();
                continue;
            }
            if !entry.file_type().is_file() {
                if entry.path_is_symlink() {
                    debug!("Skipping symlink {}", entry.path().display());
                }
                continue;
            }

            let file = RepoFile::new(relative);
            let parent_key = directory_key(file.relative.parent().unwrap_or(Path::new("")));
            directories
                .entry(parent_key)
                .or_default()
                .push(file.name.clone());
            files.push(file);
        }

        debug!(
            "Walked {} files in {} directories under {}",
            files.len(),
            directories.len(),
            self.root.display()
        );

        RepoSnapshot {
            root: self.root.clone(),
            files,
            directories,
        }
    }
}

fn directory_key(relative: &Path) -> String {
    let joined = slash_join(relative);
    if joined.is_empty() {
        ROOT_KEY.to_string()
    } else {
        joined
    }
}

fn slash_join(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    fn paths(snapshot: &RepoSnapshot) -> Vec<String> {
        snapshot.files().iter().map(RepoFile::display_path).collect()
    }

    #[test]
    fn prunes_hidden_and_skipped_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "src/main.rs");
        touch(root, ".git/config");
        touch(root, "node_modules/react/index.js");
        touch(root, "target/debug/app");
        touch(root, ".env");

        let snapshot = RepoWalker::new(root, &AnalysisConfig::default()).snapshot();
        assert_eq!(paths(&snapshot), vec![".env", "src/main.rs"]);
        assert!(snapshot.directories().contains_key("src"));
        assert!(!snapshot.directories().contains_key("node_modules"));
    }

    #[test]
    fn groups_files_under_parent_directory_in_sorted_order() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "b.py");
        touch(root, "a.py");
        touch(root, "pkg/z.go");
        touch(root, "pkg/inner/y.go");

        let snapshot = RepoWalker::new(root, &AnalysisConfig::default()).snapshot();
        let keys: Vec<&String> = snapshot.directories().keys().collect();
        assert_eq!(keys, vec![".", "pkg", "pkg/inner"]);
        assert_eq!(snapshot.directories()[ROOT_KEY], vec!["a.py", "b.py"]);
        assert_eq!(snapshot.directories()["pkg"], vec!["z.go"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_and_directories_are_not_walked() {
        use std::os::unix::fs::symlink;

        let outside = TempDir::new().unwrap();
        touch(outside.path(), "secrets/keys.rs");
        touch(outside.path(), "token.py");

        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "src/lib.rs");
        symlink(outside.path().join("secrets"), root.join("linked_dir")).unwrap();
        symlink(outside.path().join("token.py"), root.join("src/linked.py")).unwrap();

        let snapshot = RepoWalker::new(root, &AnalysisConfig::default()).snapshot();
        assert_eq!(paths(&snapshot), vec!["src/lib.rs"]);
        let keys: Vec<&String> = snapshot.directories().keys().collect();
        assert_eq!(keys, vec![".", "src"]);
        assert_eq!(snapshot.directories()["src"], vec!["lib.rs"]);
    }

    #[test]
    fn honors_ignore_file_and_custom_skip_list() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::write(root.join(".repolensignore"), "generated/\n*.min.js\n").unwrap();
        touch(root, "generated/schema.rs");
        touch(root, "web/app.min.js");
        touch(root, "web/app.js");
        touch(root, "third_party/lib.c");

        let config = AnalysisConfig {
            skip_dirs: vec!["third_party".to_string()],
            ..AnalysisConfig::default()
        };
        let snapshot = RepoWalker::new(root, &config).snapshot();
        assert_eq!(paths(&snapshot), vec![".repolensignore", "web/app.js"]);

        let unfiltered = RepoWalker::new(
            root,
            &AnalysisConfig {
                use_ignore_file: false,
                skip_dirs: Vec::new(),
                ..AnalysisConfig::default()
            },
        )
        .snapshot();
        assert_eq!(unfiltered.file_count(), 5);
    }

    #[test]
    fn repo_file_helpers() {
        let file = RepoFile::new("src/Lib.RS");
        assert_eq!(file.name, "Lib.RS");
        assert_eq!(file.extension().as_deref(), Some("rs"));
        assert!(!file.is_hidden());
        assert!(RepoFile::new(".eslintrc.js").is_hidden());
    }
}
