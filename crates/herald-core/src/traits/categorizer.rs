//! Notification categorization trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Maps fine-grained notification types to coarser display categories.
///
/// There is no built-in scheme; the integration supplies the mapping.
#[async_trait]
pub trait Categorizer: Send + Sync + std::fmt::Debug + 'static {
    /// Return the category that `event_type` belongs to.
    async fn map_type_to_category(&self, event_type: &str) -> AppResult<String>;
}
