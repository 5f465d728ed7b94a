//! Per-directory overview of the files that matter

use crate::analysis::walker::RepoSnapshot;
use crate::config::constants::files;
use indexmap::IndexMap;
use std::path::Path;

/// Source files and top-level manifests are key files
pub fn is_key_file(name: &str) -> bool {
    if name.starts_with('.') {
        return false;
    }
    if files::STRUCTURE_MANIFESTS.contains(&name) {
        return true;
    }
    // Extension comparison is case-sensitive, as in `.py` but not `.PY`
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| files::STRUCTURE_EXTENSIONS.contains(&ext))
}

/// Directory key -> up to `max_per_dir` key files, omitting directories without any
pub fn analyze_structure(
    snapshot: &RepoSnapshot,
    max_per_dir: usize,
) -> IndexMap<String, Vec<String>> {
    snapshot
        .directories()
        .iter()
        .filter_map(|(directory, names)| {
            let key_files: Vec<String> = names
                .iter()
                .filter(|name| is_key_file(name))
                .take(max_per_dir)
                .cloned()
                .collect();
            (!key_files.is_empty()).then(|| (directory.clone(), key_files))
        })
        .collect()
}
