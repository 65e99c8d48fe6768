//! Message catalog trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{MessageParam, RenderableMessage};

/// Produces localizable messages from a key and ordered parameters.
#[async_trait]
pub trait MessageCatalog: Send + Sync + std::fmt::Debug + 'static {
    /// Select the message for `key` and bind `params` positionally.
    ///
    /// The result is deferred: interpolation is left to the caller.
    async fn render(&self, key: &str, params: &[MessageParam]) -> AppResult<RenderableMessage>;
}
