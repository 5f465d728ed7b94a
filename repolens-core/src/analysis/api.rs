use crate::analysis::walker::RepoFile;

const API_PATTERNS: &[&str] = &["api", "route", "endpoint", "controller"];

pub fn is_api_file(name: &str) -> bool {
    let lowered = name.to_lowercase();
    API_PATTERNS.iter().any(|pattern| lowered.contains(pattern))
}

/// Files that likely define an HTTP or RPC surface, in walk order
pub fn find_api_files(files: &[RepoFile], limit: usize) -> Vec<String> {
    files
        .iter()
        .filter(|file| !file.is_hidden() && is_api_file(&file.name))
        .map(RepoFile::display_path)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_names_case_insensitively() {
        let files: Vec<RepoFile> = [
            "src/api/mod.rs",
            "src/routes.ts",
            "app/UserController.java",
            "handlers/endpoints.go",
            "src/lib.rs",
            ".apirc",
        ]
        .into_iter()
        .map(RepoFile::new)
        .collect();

        assert_eq!(
            find_api_files(&files, 15),
            vec!["src/routes.ts", "app/UserController.java", "handlers/endpoints.go"]
        );
        assert_eq!(find_api_files(&files, 1), vec!["src/routes.ts"]);
    }
}
