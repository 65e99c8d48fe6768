//! CLI command definitions and dispatch.

pub mod config;
pub mod export;
pub mod header;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use herald_core::config::AppConfig;
use herald_core::error::AppError;

/// Herald: render stored notifications for display
#[derive(Debug, Parser)]
#[command(name = "herald", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export notification records as presentation views
    Export(export::ExportArgs),
    /// Render a single notification header
    Header(header::HeaderArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Export(args) => export::execute(args, config, self.format).await,
            Commands::Header(args) => header::execute(args, config).await,
            Commands::Config(args) => config::execute(args, config, &self.config).await,
        }
    }
}
