//! # repolens-core - Repository analysis for repolens
//!
//! `repolens-core` turns a GitHub repository (or a local checkout) into an
//! architecture report. It clones the repository shallowly into a temporary
//! directory, walks it once, and runs a set of small analyzers over the
//! result.
//!
//! ## Highlights
//!
//! - **Source resolution**: HTTPS, SSH and scheme-less `github.com/owner/name`
//!   locators, or an existing directory analyzed in place.
//! - **Scoped clones**: `git clone --depth 1` under a timeout, removed when the
//!   checkout is dropped unless explicitly kept.
//! - **Analyzers**: language mix, frameworks and dependencies from manifests,
//!   key files per directory, entry points, configuration and test files, API
//!   surface files, and a README excerpt.
//! - **Reports**: Markdown, pretty JSON, or Markdown styled for the terminal.
//! - **Skill installer**: writes a `SKILL.md` that lets an AI coding assistant
//!   host drive the analyzer.
//! - **Configuration-first**: every limit is read from `repolens.toml`, with
//!   defaults centralized in `config::constants`.
//!
//! ## Quickstart
//!
//! ```rust,no_run
//! use repolens_core::{RepoAnalyzer, RepoSource, config::ConfigManager, report};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigManager::load()?.into_config();
//!     let source = RepoSource::resolve("https://github.com/rust-lang/cargo")?;
//!
//!     let outcome = RepoAnalyzer::new(config).analyze(&source).await?;
//!     println!("{}", report::render_markdown(&outcome.analysis));
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod fetch;
pub mod report;
pub mod skill;
pub mod source;
pub mod utils;

pub use analysis::{AnalysisOutcome, RepoAnalysis, RepoAnalyzer, RepositoryInfo};
pub use config::{ConfigManager, RepolensConfig, ReportFormat};
pub use source::{GitHubRepo, RepoSource, SourceError, parse_github_url};
