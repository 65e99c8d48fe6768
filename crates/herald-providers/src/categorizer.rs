//! Categorizer backed by the `[categories]` config section.

use std::collections::HashMap;

use async_trait::async_trait;

use herald_core::error::AppError;
use herald_core::result::AppResult;
use herald_core::traits::Categorizer;

/// Looks categories up in an explicit type to category table.
///
/// Types missing from the table are an error; no fallback category is
/// invented.
#[derive(Debug, Clone, Default)]
pub struct MappedCategorizer {
    categories: HashMap<String, String>,
}

impl MappedCategorizer {
    pub fn new(categories: HashMap<String, String>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl Categorizer for MappedCategorizer {
    async fn map_type_to_category(&self, event_type: &str) -> AppResult<String> {
        self.categories.get(event_type).cloned().ok_or_else(|| {
            AppError::not_found(format!("No category configured for type '{event_type}'"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mapping() {
        let categorizer = MappedCategorizer::new(HashMap::from([(
            "edit-user-talk".to_string(),
            "edit-user-talk".to_string(),
        )]));
        assert_eq!(
            categorizer
                .map_type_to_category("edit-user-talk")
                .await
                .expect("known"),
            "edit-user-talk"
        );
        assert!(categorizer.map_type_to_category("mention").await.is_err());
    }
}
