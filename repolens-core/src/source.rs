//! Repository locators: GitHub URLs and local checkouts

use crate::config::constants::github;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

static HTTPS_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?github\.com/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)(?:/.*)?$")
        .expect("https github pattern compiles")
});

static SSH_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:ssh://)?git@github\.com[:/]([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?/?$")
        .expect("ssh github pattern compiles")
});

/// Errors raised while resolving or fetching a repository
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot parse GitHub URL: {0}")]
    InvalidUrl(String),

    #[error("git executable '{0}' not found; install git or set clone.git_binary")]
    GitNotFound(String),

    #[error("git clone of {url} failed: {stderr}")]
    CloneFailed { url: String, stderr: String },

    #[error("git clone of {url} timed out after {seconds}s")]
    CloneTimeout { url: String, seconds: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A repository hosted on GitHub
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitHubRepo {
    pub owner: String,
    pub name: String,
    /// URL as supplied by the user, normalized for cloning
    pub url: String,
    #[serde(skip)]
    ssh: bool,
}

impl GitHubRepo {
    /// `owner/name`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Browser URL for the repository
    pub fn web_url(&self) -> String {
        format!("{}/{}/{}", github::HTTPS_BASE, self.owner, self.name)
    }

    /// URL handed to `git clone`; SSH inputs keep SSH so private keys apply
    pub fn clone_url(&self) -> String {
        if self.ssh {
            format!("git@{}:{}/{}.git", github::HOST, self.owner, self.name)
        } else {
            format!("{}.git", self.web_url())
        }
    }
}

impl fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

/// Parse the GitHub URL forms users paste into chat
pub fn parse_github_url(input: &str) -> Result<GitHubRepo, SourceError> {
    let trimmed = input.trim();
    let without_suffix = trimmed
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    let (captures, ssh) = if let Some(caps) = SSH_URL.captures(without_suffix) {
        (caps, true)
    } else if let Some(caps) = HTTPS_URL.captures(without_suffix) {
        (caps, false)
    } else {
        return Err(SourceError::InvalidUrl(trimmed.to_string()));
    };

    let owner = captures[1].to_string();
    let name = captures[2]
        .strip_suffix(".git")
        .unwrap_or(&captures[2])
        .to_string();

    if name.is_empty() || matches!(name.as_str(), "." | "..") || matches!(owner.as_str(), "." | "..")
    {
        return Err(SourceError::InvalidUrl(trimmed.to_string()));
    }

    let mut repo = GitHubRepo {
        owner,
        name,
        url: String::new(),
        ssh,
    };
    repo.url = repo.clone_url();
    Ok(repo)
}

/// Where the repository under analysis lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSource {
    GitHub(GitHubRepo),
    Local(PathBuf),
}

impl RepoSource {
    /// An existing directory is analyzed in place; anything else must be a GitHub URL
    pub fn resolve(input: &str) -> Result<Self, SourceError> {
        let candidate = Path::new(input.trim());
        if candidate.is_dir() {
            return Ok(RepoSource::Local(candidate.to_path_buf()));
        }
        parse_github_url(input).map(RepoSource::GitHub)
    }

    /// Short human-readable label for progress output
    pub fn label(&self) -> String {
        match self {
            RepoSource::GitHub(repo) => repo.slug(),
            RepoSource::Local(path) => path.display().to_string(),
        }
    }
}
