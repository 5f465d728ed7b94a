//! Command-line interface module
//!
//! Argument parsing lives in `args`; each subcommand has its own handler.

pub mod analyze;
pub mod args;
pub mod config;
pub mod install_skill;
pub mod languages;

pub use analyze::handle_analyze_command;
pub use args::*;
pub use config::handle_config_command;
pub use install_skill::handle_install_skill_command;
pub use languages::handle_languages_command;
