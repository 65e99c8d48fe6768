//! Config store over the merged configuration tree.

use async_trait::async_trait;
use serde_json::Value;

use herald_core::config::AppConfig;
use herald_core::result::AppResult;
use herald_core::traits::ConfigStore;

/// Serves dotted-path lookups from a JSON snapshot of the configuration.
#[derive(Debug, Clone)]
pub struct TreeConfigStore {
    tree: Value,
}

impl TreeConfigStore {
    /// Snapshot the given configuration.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Ok(Self {
            tree: config.to_tree()?,
        })
    }

    /// Serve lookups from an arbitrary JSON tree.
    pub fn from_tree(tree: Value) -> Self {
        Self { tree }
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.tree, |node, part| node.as_object()?.get(part))
    }
}

#[async_trait]
impl ConfigStore for TreeConfigStore {
    async fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.lookup(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_dotted_lookup() {
        let store = TreeConfigStore::from_tree(json!({
            "icons": { "notification": { "edit": "edit.svg" } },
            "flag": true,
        }));
        assert_eq!(
            store.get("icons.notification").await.expect("ok"),
            Some(json!({ "edit": "edit.svg" }))
        );
        assert_eq!(store.get("icons.missing").await.expect("ok"), None);
        assert_eq!(store.get("flag.nested").await.expect("ok"), None);
    }

    #[tokio::test]
    async fn test_from_config_exposes_importance() {
        let config = AppConfig::from_toml_str("[Notiheze.importance]\nmention = 3\n")
            .expect("parse");
        let store = TreeConfigStore::from_config(&config).expect("tree");
        assert_eq!(
            store.get("Notiheze.importance").await.expect("ok"),
            Some(json!({ "mention": 3 }))
        );
    }
}
