use anyhow::Result;
use console::style;
use repolens_core::RepolensConfig;
use std::path::Path;

/// Handle the config command
pub fn handle_config_command(output: &Path, force: bool) -> Result<()> {
    RepolensConfig::create_sample_config(output, force)?;
    eprintln!(
        "{} {}",
        style("Configuration written to").green().bold(),
        output.display()
    );
    Ok(())
}
