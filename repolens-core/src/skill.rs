//! Skill document for AI coding assistant hosts
//!
//! The host loads `SKILL.md` from `~/.claude/skills/<name>/`. When a user
//! shares a GitHub link, the document tells the host to run the analyzer and
//! summarize the Markdown report it prints.

use crate::config::SkillConfig;
use crate::config::constants::skill;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
    #[error("could not determine the home directory; pass --dir explicitly")]
    NoHomeDir,
    #[error("failed to write skill to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Rendered `SKILL.md`
pub struct SkillDocument;

impl SkillDocument {
    pub fn render(config: &SkillConfig) -> String {
        let command = &config.command;
        format!(
            r#"---
name: {name}
description: {description}
---

# {name}

Use this skill when the user shares a GitHub repository link (or a local
checkout path) and wants to understand how the project is built.

## Steps

1. Run the analyzer on the repository:

   ```bash
   {command} analyze <github-url> --format markdown
   ```

   Add `--branch <name>` to analyze something other than the default branch.
   Use `--format json` when you need the raw data instead of the report.

2. Read the report. It covers the main language and language mix, frameworks,
   dependencies and build tools, the key files in each directory, entry
   points, configuration and test files, likely API files, and a README
   excerpt.

3. Reply with a short architecture summary:
   - what the project does (from the README excerpt)
   - the tech stack
   - how the code is organized and where execution starts
   - where to look first when making a change

If the command fails, show the error to the user. The usual causes are a
private repository, a mistyped URL, or `git` missing from `PATH`.
"#,
            name = config.name,
            description = yaml_quoted(config.description.trim()),
        )
    }
}

/// YAML double-quoted scalar, so `: `, `#` or a leading `[` in the text stay literal
fn yaml_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Where the skill ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub path: PathBuf,
    /// An existing file was replaced
    pub overwritten: bool,
}

/// `~/.claude/skills/<name>`
pub fn default_skill_dir(name: &str) -> Result<PathBuf, SkillError> {
    let home = dirs::home_dir().ok_or(SkillError::NoHomeDir)?;
    Ok(home.join(skill::HOST_DIR).join(skill::SKILLS_DIR).join(name))
}

/// Write `SKILL.md` into `target_dir`, or the host's default skill directory
pub fn install(
    config: &SkillConfig,
    target_dir: Option<&Path>,
    force: bool,
) -> Result<InstallOutcome, SkillError> {
    let dir = match target_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_skill_dir(&config.name)?,
    };
    let path = dir.join(skill::FILE_NAME);

    let overwritten = path.exists();
    if overwritten && !force {
        return Err(SkillError::AlreadyExists(path));
    }

    fs::create_dir_all(&dir).map_err(|source| SkillError::Io {
        path: dir.clone(),
        source,
    })?;
    fs::write(&path, SkillDocument::render(config)).map_err(|source| SkillError::Io {
        path: path.clone(),
        source,
    })?;

    info!("Installed skill '{}' at {}", config.name, path.display());
    Ok(InstallOutcome { path, overwritten })
}
