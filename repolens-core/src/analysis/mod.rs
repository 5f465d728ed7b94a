//! Repository analysis
//!
//! Every analyzer works from a single [`walker::RepoSnapshot`] (or the root
//! directory for manifest and README lookups). [`analyzer::RepoAnalyzer`] runs
//! them in order and assembles a [`analyzer::RepoAnalysis`].

pub mod analyzer;
pub mod api;
pub mod entry_points;
pub mod languages;
pub mod readme;
pub mod structure;
pub mod tech_stack;
pub mod walker;

pub use analyzer::{AnalysisOutcome, RepoAnalysis, RepoAnalyzer, RepositoryInfo};
pub use entry_points::EntryPoints;
pub use languages::LanguageStats;
pub use readme::Readme;
pub use tech_stack::TechStack;
pub use walker::{RepoFile, RepoSnapshot, RepoWalker};
