//! User directory and site registry configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration for the config-backed user directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Prefix for user profile URLs; the user page title is appended.
    #[serde(default = "default_profile_base_url")]
    pub profile_base_url: String,
    /// Known users as numeric id (string key) to user name.
    #[serde(default)]
    pub users: HashMap<String, String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            profile_base_url: default_profile_base_url(),
            users: HashMap::new(),
        }
    }
}

/// A single origin site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Human-readable site name.
    #[serde(default)]
    pub name: String,
    /// Canonical base URL.
    pub base_url: String,
}

fn default_profile_base_url() -> String {
    "http://localhost/wiki/".to_string()
}
