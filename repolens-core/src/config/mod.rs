//! repolens configuration module
//!
//! This module handles loading and managing configuration from repolens.toml files.
//! Every section falls back to built-in defaults, so an empty or partial file is valid.

pub mod constants;
pub mod loader;
pub mod types;

pub use loader::{ConfigManager, RepolensConfig};
pub use types::ReportFormat;

use serde::{Deserialize, Serialize};

/// Analysis limits and traversal settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Maximum README characters included in the analysis
    #[serde(default = "default_readme_max_chars")]
    pub readme_max_chars: usize,

    /// Maximum dependencies recorded per manifest
    #[serde(default = "default_max_dependencies")]
    pub max_dependencies: usize,

    /// Maximum key files listed for each directory
    #[serde(default = "default_max_key_files_per_dir")]
    pub max_key_files_per_dir: usize,

    /// Maximum entry point files reported
    #[serde(default = "default_max_main_files")]
    pub max_main_files: usize,

    /// Maximum configuration files reported
    #[serde(default = "default_max_config_files")]
    pub max_config_files: usize,

    /// Maximum test files reported
    #[serde(default = "default_max_test_files")]
    pub max_test_files: usize,

    /// Maximum API surface files reported
    #[serde(default = "default_max_api_files")]
    pub max_api_files: usize,

    /// Directory names skipped at any depth (hidden directories are always skipped)
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    /// Honor a .repolensignore file at the repository root
    #[serde(default = "default_true")]
    pub use_ignore_file: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            readme_max_chars: default_readme_max_chars(),
            max_dependencies: default_max_dependencies(),
            max_key_files_per_dir: default_max_key_files_per_dir(),
            max_main_files: default_max_main_files(),
            max_config_files: default_max_config_files(),
            max_test_files: default_max_test_files(),
            max_api_files: default_max_api_files(),
            skip_dirs: default_skip_dirs(),
            use_ignore_file: default_true(),
        }
    }
}

fn default_readme_max_chars() -> usize {
    constants::limits::README_MAX_CHARS
}
fn default_max_dependencies() -> usize {
    constants::limits::MAX_DEPENDENCIES
}
fn default_max_key_files_per_dir() -> usize {
    constants::limits::MAX_KEY_FILES_PER_DIR
}
fn default_max_main_files() -> usize {
    constants::limits::MAX_MAIN_FILES
}
fn default_max_config_files() -> usize {
    constants::limits::MAX_CONFIG_FILES
}
fn default_max_test_files() -> usize {
    constants::limits::MAX_TEST_FILES
}
fn default_max_api_files() -> usize {
    constants::limits::MAX_API_FILES
}
fn default_skip_dirs() -> Vec<String> {
    constants::skip::DEFAULT_SKIP_DIRS
        .iter()
        .map(|dir| dir.to_string())
        .collect()
}
fn default_true() -> bool {
    true
}

/// git clone settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CloneConfig {
    /// git executable to invoke
    #[serde(default = "default_git_binary")]
    pub git_binary: String,

    /// Value passed to `git clone --depth`
    #[serde(default = "default_depth")]
    pub depth: u32,

    /// Abort the clone after this many seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Branch or tag to check out instead of the default branch
    #[serde(default)]
    pub branch: Option<String>,

    /// Keep the temporary checkout after analysis
    #[serde(default)]
    pub keep_clone: bool,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            git_binary: default_git_binary(),
            depth: default_depth(),
            timeout_seconds: default_timeout_seconds(),
            branch: None,
            keep_clone: false,
        }
    }
}

fn default_git_binary() -> String {
    constants::clone::GIT_BINARY.to_string()
}
fn default_depth() -> u32 {
    constants::clone::DEPTH
}
fn default_timeout_seconds() -> u64 {
    constants::clone::TIMEOUT_SECONDS
}

/// Report rendering settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: ReportFormat,

    /// Leave the README excerpt out of rendered reports
    #[serde(default)]
    pub omit_readme: bool,
}

/// Skill document settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkillConfig {
    /// Skill name, also the install directory name
    #[serde(default = "default_skill_name")]
    pub name: String,

    /// One-line description shown by the host
    #[serde(default = "default_skill_description")]
    pub description: String,

    /// Command the host should run (defaults to `repolens`)
    #[serde(default = "default_skill_command")]
    pub command: String,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            name: default_skill_name(),
            description: default_skill_description(),
            command: default_skill_command(),
        }
    }
}

fn default_skill_name() -> String {
    constants::skill::DEFAULT_NAME.to_string()
}
fn default_skill_description() -> String {
    constants::skill::DEFAULT_DESCRIPTION.to_string()
}
fn default_skill_command() -> String {
    "repolens".to_string()
}
