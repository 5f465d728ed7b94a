use anyhow::Result;
use console::style;
use repolens_core::config::SkillConfig;
use repolens_core::skill;
use std::path::Path;

/// Handle the install-skill command
pub fn handle_install_skill_command(
    config: &SkillConfig,
    dir: Option<&Path>,
    force: bool,
) -> Result<()> {
    let outcome = skill::install(config, dir, force)?;

    let verb = if outcome.overwritten {
        "Replaced"
    } else {
        "Installed"
    };
    eprintln!(
        "{} skill '{}' at {}",
        style(verb).green().bold(),
        config.name,
        outcome.path.display()
    );
    eprintln!(
        "{}",
        style("Restart your assistant, then paste a GitHub link to use it.").dim()
    );
    Ok(())
}
