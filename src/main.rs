//! repolens - architecture reports for GitHub repositories
//!
//! Entry point for the `repolens` binary. Parsing lives in `cli::args`, each
//! subcommand handler in its own `cli` module, and all analysis in
//! `repolens-core`.

use anyhow::Result;
use clap::Parser;
use console::style;
use is_terminal::IsTerminal;
use repolens_core::ConfigManager;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::*;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    if args.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    init_tracing(&args);

    if let Err(err) = run(args).await {
        eprintln!("{} {}", style("Error:").red().bold(), err);
        for cause in err.chain().skip(1) {
            eprintln!("  {} {}", style("caused by:").red(), cause);
        }
        std::process::exit(1);
    }
}

fn init_tracing(args: &Cli) {
    let level = if args.verbose {
        "debug"
    } else {
        args.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .init();
}

async fn run(args: Cli) -> Result<()> {
    match args.command {
        Commands::Analyze(analyze) => {
            let manager = ConfigManager::load_with_override(args.config.as_deref())?;
            if let Some(path) = manager.config_path() {
                debug!("Using configuration {}", path.display());
            }
            handle_analyze_command(manager.into_config(), analyze, args.no_color).await
        }
        Commands::Config { output, force } => handle_config_command(&output, force),
        Commands::InstallSkill { dir, force } => {
            let manager = ConfigManager::load_with_override(args.config.as_deref())?;
            handle_install_skill_command(&manager.config().skill, dir.as_deref(), force)
        }
        Commands::Languages => handle_languages_command(),
    }
}
