//! Structured configuration lookup trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Read-only access to structured configuration values.
#[async_trait]
pub trait ConfigStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get the value stored under `key` (dotted paths such as
    /// `"icons.notification"` address nested tables).
    ///
    /// Returns `Ok(None)` if the key is not configured.
    async fn get(&self, key: &str) -> AppResult<Option<serde_json::Value>>;
}
