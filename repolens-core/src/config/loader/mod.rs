use crate::config::constants::config as config_files;
use crate::config::{AnalysisConfig, CloneConfig, ReportConfig, SkillConfig};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure for repolens
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RepolensConfig {
    /// Traversal and analysis limits
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// git clone settings
    #[serde(default)]
    pub clone: CloneConfig,

    /// Report rendering settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Skill packaging settings
    #[serde(default)]
    pub skill: SkillConfig,
}

impl RepolensConfig {
    /// Create sample configuration file
    pub fn create_sample_config<P: AsRef<Path>>(output: P, force: bool) -> Result<()> {
        let output = output.as_ref();
        if output.exists() && !force {
            bail!(
                "Config file already exists: {} (use --force to overwrite)",
                output.display()
            );
        }

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let default_config = RepolensConfig::default();
        let config_content = toml::to_string_pretty(&default_config)
            .context("Failed to serialize default configuration")?;

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }
}

/// Configuration manager for loading configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: RepolensConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Load an explicit file when given, otherwise search the default locations
    pub fn load_with_override(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific workspace
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        Self::load_from_candidates(Self::candidate_paths(workspace.as_ref(), dirs::home_dir()))
    }

    fn load_from_candidates(candidates: Vec<PathBuf>) -> Result<Self> {
        for candidate in candidates {
            if candidate.is_file() {
                return Self::load_from_file(&candidate);
            }
            debug!("No config at {}", candidate.display());
        }

        Ok(Self {
            config: RepolensConfig::default(),
            config_path: None,
        })
    }

    /// Search order: ./repolens.toml, ./.repolens/repolens.toml, ~/.repolens/repolens.toml
    fn candidate_paths(workspace: &Path, home_dir: Option<PathBuf>) -> Vec<PathBuf> {
        let mut candidates = vec![
            workspace.join(config_files::CONFIG_FILE_NAME),
            workspace
                .join(config_files::CONFIG_DIR_NAME)
                .join(config_files::CONFIG_FILE_NAME),
        ];
        if let Some(home) = home_dir {
            candidates.push(
                home.join(config_files::CONFIG_DIR_NAME)
                    .join(config_files::CONFIG_FILE_NAME),
            );
        }
        candidates
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: RepolensConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!("Loaded configuration from {}", path.display());

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &RepolensConfig {
        &self.config
    }

    /// Consume the manager and return the configuration
    pub fn into_config(self) -> RepolensConfig {
        self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let manager =
            ConfigManager::load_from_candidates(ConfigManager::candidate_paths(tmp.path(), None))
                .unwrap();
        assert!(manager.config_path().is_none());
        assert_eq!(manager.config().analysis.readme_max_chars, 2000);
        assert_eq!(manager.config().clone.depth, 1);
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("repolens.toml"),
            "[analysis]\nmax_api_files = 3\n\n[report]\nformat = \"json\"\n",
        )
        .unwrap();

        let manager = ConfigManager::load_from_workspace(tmp.path()).unwrap();
        let config = manager.config();
        assert_eq!(config.analysis.max_api_files, 3);
        assert_eq!(config.analysis.max_dependencies, 20);
        assert!(config.analysis.skip_dirs.contains(&"node_modules".to_string()));
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.clone.git_binary, "git");
    }

    #[test]
    fn dot_directory_is_searched_second() {
        let tmp = TempDir::new().unwrap();
        let dot_dir = tmp.path().join(".repolens");
        std::fs::create_dir_all(&dot_dir).unwrap();
        std::fs::write(dot_dir.join("repolens.toml"), "[clone]\ndepth = 5\n").unwrap();

        let manager = ConfigManager::load_from_workspace(tmp.path()).unwrap();
        assert_eq!(manager.config().clone.depth, 5);
        assert_eq!(manager.config_path(), Some(dot_dir.join("repolens.toml").as_path()));
    }

    #[test]
    fn invalid_toml_is_reported() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.toml");
        std::fs::write(&path, "[analysis\n").unwrap();

        let err = ConfigManager::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn sample_config_round_trips_and_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("repolens.toml");

        RepolensConfig::create_sample_config(&path, false).unwrap();
        let loaded = ConfigManager::load_from_file(&path).unwrap();
        assert_eq!(loaded.config().skill.name, "github-analyzer");

        assert!(RepolensConfig::create_sample_config(&path, false).is_err());
        RepolensConfig::create_sample_config(&path, true).unwrap();
    }
}
