//! Wiring of config-backed collaborators.

use std::sync::Arc;

use herald_core::config::AppConfig;
use herald_core::error::AppError;
use herald_entity::notification::NotificationRecord;
use herald_providers::{
    ConfigUserDirectory, ConfigWikiRegistry, MappedCategorizer, TemplateCatalog, TreeConfigStore,
};
use herald_service::notification::{Collaborators, NotificationView};

/// Build the collaborator set from configuration.
pub fn build_collaborators(config: &AppConfig) -> Result<Arc<Collaborators>, AppError> {
    let collaborators = Collaborators::builder()
        .user_directory(Arc::new(ConfigUserDirectory::from_config(&config.directory)?))
        .wiki_registry(Arc::new(ConfigWikiRegistry::from_config(&config.sites)))
        .message_catalog(Arc::new(TemplateCatalog::new(config.messages.clone())))
        .config_store(Arc::new(TreeConfigStore::from_config(config)?))
        .categorizer(Arc::new(MappedCategorizer::new(config.categories.clone())))
        .build()?;

    Ok(Arc::new(collaborators))
}

/// Read notification records from a JSON file holding an array of records.
pub async fn read_records(path: &str) -> Result<Vec<NotificationRecord>, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::internal(format!("Failed to read '{}': {}", path, e)))?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::data_format(format!("'{}' is not a list of notification records: {}", path, e))
    })
}

/// Load records and wrap each one in a view.
pub async fn load_views(
    path: &str,
    config: &AppConfig,
) -> Result<Vec<NotificationView>, AppError> {
    let collaborators = build_collaborators(config)?;

    read_records(path)
        .await?
        .into_iter()
        .map(|record| NotificationView::new(record, collaborators.clone()))
        .collect()
}
