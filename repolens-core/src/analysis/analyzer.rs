use crate::analysis::api::find_api_files;
use crate::analysis::entry_points::{EntryPointLimits, EntryPoints, find_entry_points};
use crate::analysis::languages::{LanguageStats, detect_languages};
use crate::analysis::readme::{Readme, read_readme};
use crate::analysis::structure::analyze_structure;
use crate::analysis::tech_stack::{TechStack, detect_tech_stack};
use crate::analysis::walker::RepoWalker;
use crate::config::RepolensConfig;
use crate::fetch::clone_repository;
use crate::source::{GitHubRepo, RepoSource};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where the analyzed tree came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryInfo {
    /// `owner/name` for GitHub, directory name for local paths
    pub name: String,
    /// Clone URL or local path
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl RepositoryInfo {
    pub fn github(repo: &GitHubRepo, branch: Option<String>) -> Self {
        Self {
            name: repo.slug(),
            source: repo.clone_url(),
            web_url: Some(repo.web_url()),
            branch,
        }
    }

    pub fn local(path: &Path) -> Self {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let name = canonical
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| canonical.display().to_string());
        Self {
            name,
            source: canonical.display().to_string(),
            web_url: None,
            branch: None,
        }
    }
}

/// Complete analysis of one repository
#[derive(Debug, Clone, Serialize)]
pub struct RepoAnalysis {
    pub repository: RepositoryInfo,
    #[serde(flatten)]
    pub languages: LanguageStats,
    pub tech_stack: TechStack,
    pub structure: IndexMap<String, Vec<String>>,
    pub entry_points: EntryPoints,
    pub api_files: Vec<String>,
    pub readme: Option<Readme>,
    pub analyzed_at: DateTime<Utc>,
}

/// Result of [`RepoAnalyzer::analyze`]
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub analysis: RepoAnalysis,
    /// Set when the temporary clone was kept on disk
    pub kept_clone: Option<PathBuf>,
}

/// Runs every analyzer against a repository checkout
#[derive(Debug, Clone, Default)]
pub struct RepoAnalyzer {
    config: RepolensConfig,
}

impl RepoAnalyzer {
    pub fn new(config: RepolensConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RepolensConfig {
        &self.config
    }

    /// Analyze a directory that is already on disk
    pub fn analyze_path(&self, root: &Path, repository: RepositoryInfo) -> Result<RepoAnalysis> {
        if !root.is_dir() {
            bail!("Not a directory: {}", root.display());
        }
        let limits = &self.config.analysis;

        let snapshot = RepoWalker::new(root, limits).snapshot();
        info!("Scanned {} files", snapshot.file_count());

        let readme = read_readme(root, limits.readme_max_chars);
        let languages = detect_languages(snapshot.files());
        let tech_stack = detect_tech_stack(root, limits.max_dependencies);
        let structure = analyze_structure(&snapshot, limits.max_key_files_per_dir);
        let entry_points = find_entry_points(
            snapshot.files(),
            EntryPointLimits {
                main_files: limits.max_main_files,
                config_files: limits.max_config_files,
                test_files: limits.max_test_files,
            },
        );
        let api_files = find_api_files(snapshot.files(), limits.max_api_files);

        Ok(RepoAnalysis {
            repository,
            languages,
            tech_stack,
            structure,
            entry_points,
            api_files,
            readme,
            analyzed_at: Utc::now(),
        })
    }

    /// Resolve, fetch if remote, analyze, and clean up the clone
    pub async fn analyze(&self, source: &RepoSource) -> Result<AnalysisOutcome> {
        match source {
            RepoSource::Local(path) => {
                let analysis = self
                    .analyze_blocking(path.clone(), RepositoryInfo::local(path))
                    .await?;
                Ok(AnalysisOutcome {
                    analysis,
                    kept_clone: None,
                })
            }
            RepoSource::GitHub(repo) => {
                let checkout = clone_repository(repo, &self.config.clone)
                    .await
                    .with_context(|| format!("Failed to fetch {}", repo.slug()))?;

                let info = RepositoryInfo::github(repo, self.config.clone.branch.clone());
                let result = self
                    .analyze_blocking(checkout.path().to_path_buf(), info)
                    .await;

                let kept_clone = if self.config.clone.keep_clone {
                    Some(checkout.keep())
                } else {
                    if let Err(err) = checkout.cleanup() {
                        warn!("Failed to remove temporary clone: {}", err);
                    }
                    None
                };

                Ok(AnalysisOutcome {
                    analysis: result?,
                    kept_clone,
                })
            }
        }
    }

    async fn analyze_blocking(&self, root: PathBuf, info: RepositoryInfo) -> Result<RepoAnalysis> {
        let analyzer = self.clone();
        tokio::task::spawn_blocking(move || analyzer.analyze_path(&root, info))
            .await
            .context("Analysis task panicked")?
    }
}
