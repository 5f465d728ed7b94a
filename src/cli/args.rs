//! CLI argument parsing

use clap::{Args, Parser, Subcommand};
use repolens_core::ReportFormat;
use repolens_core::config::constants::config::CONFIG_FILE_NAME;
use std::path::PathBuf;

/// Main CLI structure for repolens
#[derive(Parser, Debug)]
#[command(
    name = "repolens",
    version,
    about = "Analyze a GitHub repository and generate an architecture report"
)]
pub struct Cli {
    /// Configuration file path (defaults to repolens.toml lookup)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a GitHub repository or local directory
    Analyze(AnalyzeArgs),

    /// Write a default repolens.toml
    Config {
        /// Where to write the file
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Install the SKILL.md that lets an AI coding assistant run repolens
    InstallSkill {
        /// Target directory (defaults to ~/.claude/skills/<name>)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Overwrite an existing SKILL.md
        #[arg(long)]
        force: bool,
    },

    /// List the file extensions recognised for each language
    Languages,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// GitHub URL (https, ssh or github.com/owner/name) or a local directory
    pub source: String,

    /// Report format (markdown, json, text)
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Branch or tag to clone
    #[arg(long)]
    pub branch: Option<String>,

    /// Clone depth
    #[arg(long)]
    pub depth: Option<u32>,

    /// Abort the clone after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Keep the temporary clone and print its location
    #[arg(long)]
    pub keep_clone: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyze_with_overrides() {
        let cli = Cli::try_parse_from([
            "repolens",
            "--verbose",
            "analyze",
            "https://github.com/tokio-rs/tokio",
            "--format",
            "json",
            "--branch",
            "master",
            "--keep-clone",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.source, "https://github.com/tokio-rs/tokio");
        assert_eq!(args.format, Some(ReportFormat::Json));
        assert_eq!(args.branch.as_deref(), Some("master"));
        assert!(args.keep_clone);
        assert!(args.depth.is_none());
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Cli::try_parse_from(["repolens", "analyze", ".", "--format", "html"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_defaults_to_repolens_toml() {
        let cli = Cli::try_parse_from(["repolens", "config"]).unwrap();
        match cli.command {
            Commands::Config { output, force } => {
                assert_eq!(output, PathBuf::from("repolens.toml"));
                assert!(!force);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
