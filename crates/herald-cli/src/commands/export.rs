//! Export command: render every record in a file.

use std::cmp::Reverse;

use clap::Args;
use tabled::Tabled;

use crate::context;
use crate::output::{self, OutputFormat};
use herald_core::config::AppConfig;
use herald_core::error::AppError;
use herald_service::notification::ExportedNotification;

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// JSON file holding an array of notification records
    #[arg(short, long)]
    pub input: String,

    /// Order by importance (highest first) instead of input order
    #[arg(long)]
    pub sort_by_importance: bool,
}

/// Table row for an exported notification
#[derive(Debug, Tabled)]
struct ExportRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Type")]
    event_type: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Header")]
    header: String,
    #[tabled(rename = "Importance")]
    importance: i64,
    #[tabled(rename = "Read")]
    read: bool,
}

impl From<&ExportedNotification> for ExportRow {
    fn from(n: &ExportedNotification) -> Self {
        Self {
            id: n.id,
            event_type: n.event_type.clone(),
            category: n.category.clone().unwrap_or_else(|| "-".to_string()),
            header: n.header_short.clone().unwrap_or_else(|| "-".to_string()),
            importance: n.importance,
            read: n.read_at.is_some(),
        }
    }
}

/// Execute the export command
pub async fn execute(
    args: &ExportArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let views = context::load_views(&args.input, config).await?;

    let mut exported = Vec::with_capacity(views.len());
    for view in &views {
        exported.push(view.export_view().await);
    }

    if args.sort_by_importance {
        exported.sort_by_key(|n| Reverse(n.importance));
    }

    tracing::info!("Exported {} notifications", exported.len());
    output::print_list(&exported, |n: &ExportedNotification| ExportRow::from(n), format);
    Ok(())
}
