//! Site descriptors returned by the wiki registry.

use serde::{Deserialize, Serialize};

/// A site (wiki) that notifications can originate from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDescriptor {
    /// Registry key of the site, e.g. a database name such as `"enwiki"`.
    pub id: String,
    /// Human-readable site name.
    pub name: String,
    /// Canonical base URL of the site, without a trailing slash.
    pub base_url: String,
}

impl SiteDescriptor {
    /// Create a new site descriptor.
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The canonical base URL of the site.
    pub fn canonical_base_url(&self) -> &str {
        &self.base_url
    }
}
