//! Shallow clones into scoped temporary directories

use crate::config::CloneConfig;
use crate::config::constants::clone as clone_defaults;
use crate::source::{GitHubRepo, SourceError};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// A cloned working tree. The directory is removed when the checkout is dropped.
#[derive(Debug)]
pub struct Checkout {
    dir: TempDir,
}

impl Checkout {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Persist the directory past the lifetime of the checkout
    pub fn keep(self) -> PathBuf {
        let path = self.dir.keep();
        info!("Keeping clone at {}", path.display());
        path
    }

    /// Remove the directory now, surfacing any cleanup failure
    pub fn cleanup(self) -> io::Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close()?;
        debug!("Removed temporary clone {}", path.display());
        Ok(())
    }
}

/// Clone a GitHub repository with `git clone --depth N`
pub async fn clone_repository(
    repo: &GitHubRepo,
    config: &CloneConfig,
) -> Result<Checkout, SourceError> {
    clone_url(&repo.clone_url(), config).await
}

/// Clone any URL git understands into a fresh temporary directory
pub async fn clone_url(url: &str, config: &CloneConfig) -> Result<Checkout, SourceError> {
    let dir = tempfile::Builder::new()
        .prefix(clone_defaults::TEMP_DIR_PREFIX)
        .tempdir()?;
    clone_into(url, config, dir).await
}

/// Clone into `dir`. On any error `dir` is dropped, which removes it.
async fn clone_into(
    url: &str,
    config: &CloneConfig,
    dir: TempDir,
) -> Result<Checkout, SourceError> {
    info!("Cloning {} into {}", url, dir.path().display());

    let mut cmd = Command::new(&config.git_binary);
    cmd.arg("clone")
        .arg("--depth")
        .arg(config.depth.max(1).to_string())
        .arg("--quiet");
    if let Some(branch) = config.branch.as_deref().filter(|b| !b.trim().is_empty()) {
        cmd.arg("--branch").arg(branch);
    }
    cmd.arg(url)
        .arg(dir.path())
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let timeout = Duration::from_secs(config.timeout_seconds.max(1));
    let output = match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(err)) if err.kind() == io::ErrorKind::NotFound => {
            return Err(SourceError::GitNotFound(config.git_binary.clone()));
        }
        Ok(Err(err)) => return Err(SourceError::Io(err)),
        Err(_) => {
            warn!("Clone of {} exceeded {}s", url, timeout.as_secs());
            return Err(SourceError::CloneTimeout {
                url: url.to_string(),
                seconds: timeout.as_secs(),
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(SourceError::CloneFailed {
            url: url.to_string(),
            stderr: if stderr.is_empty() {
                format!("git exited with {}", output.status)
            } else {
                stderr
            },
        });
    }

    info!("Clone complete");
    Ok(Checkout { dir })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::parse_github_url;

    #[tokio::test]
    async fn missing_git_binary_is_reported() {
        let repo = parse_github_url("https://github.com/octocat/Hello-World").unwrap();
        let config = CloneConfig {
            git_binary: "repolens-test-no-such-git-binary".to_string(),
            ..CloneConfig::default()
        };

        let err = clone_repository(&repo, &config).await.unwrap_err();
        assert!(matches!(err, SourceError::GitNotFound(ref bin) if bin == "repolens-test-no-such-git-binary"));
    }

    fn scratch_dir(parent: &Path) -> TempDir {
        tempfile::Builder::new()
            .prefix(clone_defaults::TEMP_DIR_PREFIX)
            .tempdir_in(parent)
            .unwrap()
    }

    fn is_empty_dir(path: &Path) -> bool {
        std::fs::read_dir(path).unwrap().next().is_none()
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failed_clone_reports_exit_status_and_removes_directory() {
        let parent = TempDir::new().unwrap();
        let config = CloneConfig {
            git_binary: "false".to_string(),
            ..CloneConfig::default()
        };

        let err = clone_into(
            "https://github.com/octocat/Hello-World.git",
            &config,
            scratch_dir(parent.path()),
        )
        .await
        .unwrap_err();

        match err {
            SourceError::CloneFailed { url, stderr } => {
                assert_eq!(url, "https://github.com/octocat/Hello-World.git");
                assert!(stderr.starts_with("git exited with"), "{stderr}");
            }
            other => panic!("expected CloneFailed, got {other:?}"),
        }
        assert!(is_empty_dir(parent.path()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slow_clone_times_out_and_removes_directory() {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = TempDir::new().unwrap();
        let slow_git = bin_dir.path().join("slow-git");
        std::fs::write(&slow_git, "#!/bin/sh\nexec sleep 5\n").unwrap();
        std::fs::set_permissions(&slow_git, std::fs::Permissions::from_mode(0o755)).unwrap();

        let parent = TempDir::new().unwrap();
        let config = CloneConfig {
            git_binary: slow_git.to_string_lossy().to_string(),
            timeout_seconds: 1,
            ..CloneConfig::default()
        };

        let err = clone_into(
            "https://github.com/octocat/Hello-World.git",
            &config,
            scratch_dir(parent.path()),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, SourceError::CloneTimeout { seconds: 1, .. }), "{err:?}");
        assert!(is_empty_dir(parent.path()));
    }

    #[test]
    fn checkout_removes_directory_on_drop() {
        let dir = tempfile::Builder::new()
            .prefix(clone_defaults::TEMP_DIR_PREFIX)
            .tempdir()
            .unwrap();
        let path = dir.path().to_path_buf();
        let checkout = Checkout { dir };
        assert!(checkout.path().exists());
        drop(checkout);
        assert!(!path.exists());
    }

    #[test]
    fn keep_persists_directory() {
        let dir = tempfile::Builder::new()
            .prefix(clone_defaults::TEMP_DIR_PREFIX)
            .tempdir()
            .unwrap();
        let checkout = Checkout { dir };
        let kept = checkout.keep();
        assert!(kept.exists());
        std::fs::remove_dir_all(&kept).unwrap();
    }
}
