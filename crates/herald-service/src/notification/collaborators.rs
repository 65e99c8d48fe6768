//! Injected collaborators used by notification views.

use std::sync::Arc;

use herald_core::error::AppError;
use herald_core::traits::{Categorizer, ConfigStore, MessageCatalog, UserDirectory, WikiRegistry};

/// The external capabilities a [`NotificationView`](super::NotificationView)
/// calls into.
///
/// Built once at integration time and shared across views via `Arc`.
#[derive(Debug, Clone)]
pub struct Collaborators {
    /// Resolves agent ids to profile URLs.
    pub users: Arc<dyn UserDirectory>,
    /// Resolves origin ids to site descriptors.
    pub wikis: Arc<dyn WikiRegistry>,
    /// Selects header messages.
    pub catalog: Arc<dyn MessageCatalog>,
    /// Icon and importance configuration.
    pub config: Arc<dyn ConfigStore>,
    /// Maps types to categories.
    pub categorizer: Arc<dyn Categorizer>,
}

impl Collaborators {
    /// Start building a collaborator set.
    pub fn builder() -> CollaboratorsBuilder {
        CollaboratorsBuilder::default()
    }
}

/// Builder for [`Collaborators`].
#[derive(Debug, Default)]
pub struct CollaboratorsBuilder {
    users: Option<Arc<dyn UserDirectory>>,
    wikis: Option<Arc<dyn WikiRegistry>>,
    catalog: Option<Arc<dyn MessageCatalog>>,
    config: Option<Arc<dyn ConfigStore>>,
    categorizer: Option<Arc<dyn Categorizer>>,
}

impl CollaboratorsBuilder {
    /// Set the user directory.
    pub fn user_directory(mut self, users: Arc<dyn UserDirectory>) -> Self {
        self.users = Some(users);
        self
    }

    /// Set the wiki registry.
    pub fn wiki_registry(mut self, wikis: Arc<dyn WikiRegistry>) -> Self {
        self.wikis = Some(wikis);
        self
    }

    /// Set the message catalog.
    pub fn message_catalog(mut self, catalog: Arc<dyn MessageCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the config store.
    pub fn config_store(mut self, config: Arc<dyn ConfigStore>) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the categorizer.
    pub fn categorizer(mut self, categorizer: Arc<dyn Categorizer>) -> Self {
        self.categorizer = Some(categorizer);
        self
    }

    /// Finish building.
    ///
    /// Fails with a configuration error listing every collaborator that was
    /// never supplied.
    pub fn build(self) -> Result<Collaborators, AppError> {
        let mut missing = Vec::new();
        if self.users.is_none() {
            missing.push("user directory");
        }
        if self.wikis.is_none() {
            missing.push("wiki registry");
        }
        if self.catalog.is_none() {
            missing.push("message catalog");
        }
        if self.config.is_none() {
            missing.push("config store");
        }
        if self.categorizer.is_none() {
            missing.push("categorizer");
        }

        match (self.users, self.wikis, self.catalog, self.config, self.categorizer) {
            (Some(users), Some(wikis), Some(catalog), Some(config), Some(categorizer)) => {
                Ok(Collaborators {
                    users,
                    wikis,
                    catalog,
                    config,
                    categorizer,
                })
            }
            _ => Err(AppError::configuration(format!(
                "Notification collaborators not wired: {}",
                missing.join(", ")
            ))),
        }
    }
}
