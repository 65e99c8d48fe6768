//! User directory backed by the `[directory]` config section.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use herald_core::config::directory::DirectoryConfig;
use herald_core::error::AppError;
use herald_core::result::AppResult;
use herald_core::traits::UserDirectory;

/// Resolves the users listed in configuration to `<base>User:<name>` URLs.
#[derive(Debug, Clone)]
pub struct ConfigUserDirectory {
    profile_base_url: String,
    users: HashMap<u64, String>,
}

impl ConfigUserDirectory {
    /// Build the directory from configuration.
    pub fn from_config(config: &DirectoryConfig) -> AppResult<Self> {
        let users = config
            .users
            .iter()
            .map(|(id, name)| {
                id.parse::<u64>().map(|id| (id, name.clone())).map_err(|_| {
                    AppError::configuration(format!("User id '{id}' is not numeric"))
                })
            })
            .collect::<AppResult<HashMap<_, _>>>()?;

        Ok(Self {
            profile_base_url: config.profile_base_url.clone(),
            users,
        })
    }
}

#[async_trait]
impl UserDirectory for ConfigUserDirectory {
    async fn resolve_profile_url(&self, agent_id: u64) -> AppResult<String> {
        let name = self
            .users
            .get(&agent_id)
            .ok_or_else(|| AppError::not_found(format!("User {agent_id} not found")))?;

        debug!(agent_id, name = %name, "Resolved agent");
        Ok(format!(
            "{}User:{}",
            self.profile_base_url,
            name.replace(' ', "_")
        ))
    }
}
