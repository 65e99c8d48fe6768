//! Icon and importance configuration blocks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Icon maps, one per icon group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconsConfig {
    /// Notification type to icon name.
    #[serde(default)]
    pub notification: HashMap<String, String>,
}

/// Per-type notification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotihezeConfig {
    /// Notification type to importance; higher ranks first.
    #[serde(default)]
    pub importance: HashMap<String, i64>,
}
