//! User directory trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Resolves agent (user) identifiers to profile URLs.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve a numeric user id to the user's profile URL.
    ///
    /// An id the directory does not know is an error, not an empty value.
    async fn resolve_profile_url(&self, agent_id: u64) -> AppResult<String>;
}
