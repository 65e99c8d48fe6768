//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::context;
use crate::output;
use herald_core::config::AppConfig;
use herald_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Validate the configuration and collaborator wiring
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Validate => match context::build_collaborators(config) {
            Ok(_) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                println!("  Users: {}", config.directory.users.len());
                println!("  Sites: {}", config.sites.len());
                println!("  Messages: {}", config.messages.len());
                println!("  Categories: {}", config.categories.len());
                println!("  Icons: {}", config.icons.notification.len());
                println!("  Importance entries: {}", config.notiheze.importance.len());
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}
