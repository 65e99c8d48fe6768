//! Message catalog backed by the `[messages]` config section.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use herald_core::result::AppResult;
use herald_core::traits::MessageCatalog;
use herald_core::types::{MessageParam, RenderableMessage};

/// A flat key to template catalog in a single language.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: HashMap<String, String>,
}

impl TemplateCatalog {
    pub fn new(templates: HashMap<String, String>) -> Self {
        Self { templates }
    }
}

#[async_trait]
impl MessageCatalog for TemplateCatalog {
    async fn render(&self, key: &str, params: &[MessageParam]) -> AppResult<RenderableMessage> {
        let template = self.templates.get(key).cloned();
        if template.is_none() {
            debug!(key, "Message key not in catalog");
        }
        Ok(RenderableMessage::new(key, params.to_vec(), template))
    }
}
