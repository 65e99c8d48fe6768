//! Wiki registry backed by the `[sites]` config section.

use std::collections::HashMap;

use async_trait::async_trait;

use herald_core::config::directory::SiteConfig;
use herald_core::result::AppResult;
use herald_core::traits::WikiRegistry;
use herald_core::types::SiteDescriptor;

/// Registry of the sites listed in configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigWikiRegistry {
    sites: HashMap<String, SiteDescriptor>,
}

impl ConfigWikiRegistry {
    pub fn from_config(sites: &HashMap<String, SiteConfig>) -> Self {
        let sites = sites
            .iter()
            .map(|(id, site)| {
                let name = if site.name.is_empty() { id } else { &site.name };
                (id.clone(), SiteDescriptor::new(id, name, &site.base_url))
            })
            .collect();

        Self { sites }
    }
}

#[async_trait]
impl WikiRegistry for ConfigWikiRegistry {
    async fn resolve(&self, origin_id: &str) -> AppResult<Option<SiteDescriptor>> {
        Ok(self.sites.get(origin_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve() {
        let sites = HashMap::from([(
            "dewiki".to_string(),
            SiteConfig {
                name: String::new(),
                base_url: "https://de.example.org/".to_string(),
            },
        )]);
        let registry = ConfigWikiRegistry::from_config(&sites);

        let site = registry.resolve("dewiki").await.expect("ok").expect("known");
        assert_eq!(site.name, "dewiki");
        assert_eq!(site.canonical_base_url(), "https://de.example.org");
        assert!(registry.resolve("frwiki").await.expect("ok").is_none());
    }
}
