//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate, with `HERALD__`-prefixed environment variables layered
//! on top. Each sub-module represents a logical configuration section.

pub mod directory;
pub mod logging;
pub mod presentation;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use self::directory::{DirectoryConfig, SiteConfig};
use self::logging::LoggingConfig;
use self::presentation::{IconsConfig, NotihezeConfig};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// User directory settings.
    #[serde(default)]
    pub directory: DirectoryConfig,
    /// Known origin sites, keyed by registry id.
    #[serde(default)]
    pub sites: HashMap<String, SiteConfig>,
    /// Message templates, keyed by catalog key.
    #[serde(default)]
    pub messages: HashMap<String, String>,
    /// Notification type to category mapping.
    #[serde(default)]
    pub categories: HashMap<String, String>,
    /// Icon maps, per icon group.
    #[serde(default)]
    pub icons: IconsConfig,
    /// Per-type notification settings such as importance.
    #[serde(rename = "Notiheze", default)]
    pub notiheze: NotihezeConfig,
}

/// Top-level key of the per-type settings block.
const NOTIHEZE_KEY: &str = "Notiheze";

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error; environment variables prefixed with
    /// `HERALD__` are merged on top either way.
    pub fn load(path: &str) -> Result<Self, AppError> {
        Self::load_with(
            config::File::with_name(path).required(false),
            environment(),
        )
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::from_config(config)
    }

    fn load_with<S>(file: S, env: config::Environment) -> Result<Self, AppError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::from_config(config)
    }

    fn from_config(config: config::Config) -> Result<Self, AppError> {
        let tree: serde_json::Value = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        serde_json::from_value(fold_notiheze_case(tree))
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// The configuration as a JSON tree, used by config-backed lookups.
    pub fn to_tree(&self) -> Result<serde_json::Value, AppError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Environment source for `HERALD__SECTION__KEY` variables.
fn environment() -> config::Environment {
    config::Environment::with_prefix("HERALD")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// The environment source lowercases keys, so an override of the
/// `Notiheze` block arrives as `notiheze`. Fold it into `Notiheze`, the
/// lowercase (later) layer winning per key.
fn fold_notiheze_case(mut tree: serde_json::Value) -> serde_json::Value {
    let lower = NOTIHEZE_KEY.to_lowercase();
    if let Some(root) = tree.as_object_mut() {
        if let Some(overlay) = root.remove(&lower) {
            let base = root
                .entry(NOTIHEZE_KEY)
                .or_insert_with(|| serde_json::Value::Object(Default::default()));
            merge_into(base, overlay);
        }
    }
    tree
}

fn merge_into(base: &mut serde_json::Value, overlay: serde_json::Value) {
    match (base, overlay) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
