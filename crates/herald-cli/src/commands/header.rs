//! Header command: render one header of one record.

use clap::Args;

use crate::context;
use herald_core::config::AppConfig;
use herald_core::error::AppError;
use herald_service::notification::HeaderLength;

/// Arguments for the header command
#[derive(Debug, Args)]
pub struct HeaderArgs {
    /// JSON file holding an array of notification records
    #[arg(short, long)]
    pub input: String,

    /// Notification id
    #[arg(long)]
    pub id: u64,

    /// Render the long header instead of the short one
    #[arg(long)]
    pub long: bool,
}

/// Execute the header command
pub async fn execute(args: &HeaderArgs, config: &AppConfig) -> Result<(), AppError> {
    let views = context::load_views(&args.input, config).await?;
    let view = views
        .iter()
        .find(|v| v.id() == args.id)
        .ok_or_else(|| AppError::not_found(format!("Notification {} not in input", args.id)))?;

    let message = view.header(HeaderLength::from(args.long)).await?;
    println!("{}", message.text());
    Ok(())
}
