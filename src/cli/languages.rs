use anyhow::Result;
use console::style;
use repolens_core::analysis::languages::LANGUAGE_EXTENSIONS;

/// Handle the languages command
pub fn handle_languages_command() -> Result<()> {
    println!("{}", style("Recognised languages").cyan().bold());
    for (language, extensions) in LANGUAGE_EXTENSIONS {
        let listed = extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {:<12} {}", style(language).yellow(), listed);
    }
    println!(
        "{}",
        style("`.h` is attributed to C++, the first matching entry.").dim()
    );
    Ok(())
}
