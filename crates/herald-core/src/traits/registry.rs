//! Wiki registry trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::SiteDescriptor;

/// Resolves origin identifiers (site or database keys) to site descriptors.
#[async_trait]
pub trait WikiRegistry: Send + Sync + std::fmt::Debug + 'static {
    /// Look up a site by its registry key.
    ///
    /// Returns `Ok(None)` if the registry has no such site.
    async fn resolve(&self, origin_id: &str) -> AppResult<Option<SiteDescriptor>>;
}
