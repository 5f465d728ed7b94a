use crate::cli::AnalyzeArgs;
use anyhow::{Context, Result};
use console::style;
use is_terminal::IsTerminal;
use repolens_core::report::{self, write_report};
use repolens_core::{RepoAnalyzer, RepoSource, RepolensConfig, ReportFormat};
use std::io;
use std::time::Instant;
use tracing::debug;

/// Handle the analyze command
///
/// Progress goes to stderr so the report on stdout can be piped.
pub async fn handle_analyze_command(
    mut config: RepolensConfig,
    args: AnalyzeArgs,
    no_color: bool,
) -> Result<()> {
    if let Some(branch) = args.branch {
        config.clone.branch = Some(branch);
    }
    if let Some(depth) = args.depth {
        config.clone.depth = depth.max(1);
    }
    if let Some(timeout) = args.timeout {
        config.clone.timeout_seconds = timeout;
    }
    if args.keep_clone {
        config.clone.keep_clone = true;
    }

    let mut format = args.format.unwrap_or(config.report.format);
    if format == ReportFormat::Text
        && (no_color || args.output.is_some() || !io::stdout().is_terminal())
    {
        debug!("Styled output unavailable, writing plain Markdown");
        format = ReportFormat::Markdown;
    }

    let source = RepoSource::resolve(&args.source)
        .with_context(|| format!("'{}' is neither a directory nor a GitHub URL", args.source))?;

    eprintln!("{} {}", style("Analyzing").cyan().bold(), source.label());
    if let RepoSource::GitHub(repo) = &source {
        let branch = config.clone.branch.as_deref().unwrap_or("default branch");
        eprintln!(
            "{}",
            style(format!(
                "Cloning {} ({}, depth {})",
                repo.clone_url(),
                branch,
                config.clone.depth
            ))
            .dim()
        );
    }

    let started = Instant::now();
    let analyzer = RepoAnalyzer::new(config);
    let outcome = analyzer.analyze(&source).await?;
    let analysis = &outcome.analysis;

    eprintln!(
        "{} {} files, main language {} ({:.1}s)",
        style("Analyzed").green().bold(),
        analysis.languages.total_files,
        analysis.languages.main_language,
        started.elapsed().as_secs_f64()
    );
    if let Some(path) = &outcome.kept_clone {
        eprintln!("{} {}", style("Clone kept at").yellow(), path.display());
    }

    let content = report::render(analysis, format, analyzer.config(), None)?;
    write_report(&content, args.output.as_deref())?;

    if let Some(path) = &args.output {
        eprintln!(
            "{} {} report written to {}",
            style("Done").green().bold(),
            format,
            path.display()
        );
    }

    Ok(())
}
