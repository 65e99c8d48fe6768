//! End-to-end export tests using the config-backed collaborators.

use std::sync::Arc;

use herald_core::config::AppConfig;
use herald_entity::notification::NotificationRecord;
use herald_providers::{
    ConfigUserDirectory, ConfigWikiRegistry, MappedCategorizer, TemplateCatalog, TreeConfigStore,
};
use herald_service::notification::{Collaborators, NotificationView};

const CONFIG: &str = r#"
[directory]
profile_base_url = "https://meta.example.org/wiki/"

[directory.users]
2 = "Alice"

[sites.dewiki]
name = "German Wikipedia"
base_url = "https://de.example.org"

[messages]
"short-header-mention" = "$1 mentioned you with $2"
"long-header-mention" = "$1 and $2 in full"
"short-header-welcome" = "Welcome, [$1] $2"

[categories]
mention = "mention"

[icons.notification]
mention = "mention.svg"

[Notiheze.importance]
mention = 5
"#;

fn collaborators() -> Arc<Collaborators> {
    let config = AppConfig::from_toml_str(CONFIG).expect("config parses");
    let collaborators = Collaborators::builder()
        .user_directory(Arc::new(
            ConfigUserDirectory::from_config(&config.directory).expect("directory"),
        ))
        .wiki_registry(Arc::new(ConfigWikiRegistry::from_config(&config.sites)))
        .message_catalog(Arc::new(TemplateCatalog::new(config.messages.clone())))
        .config_store(Arc::new(TreeConfigStore::from_config(&config).expect("store")))
        .categorizer(Arc::new(MappedCategorizer::new(config.categories.clone())))
        .build()
        .expect("wired");
    Arc::new(collaborators)
}

fn record(id: u64, event_type: &str, message: &str) -> NotificationRecord {
    NotificationRecord {
        id,
        event_type: event_type.to_string(),
        message: message.to_string(),
        canonical_url: format!("https://meta.example.org/notification/{id}"),
        creation: 1_700_000_000,
        read: 0,
        origin_id: None,
        agent_id: None,
    }
}

#[tokio::test]
async fn test_mention_without_agent_or_origin() {
    let view = NotificationView::new(
        record(1, "mention", r#"[[2, "Alice"], [1, "Bob"]]"#),
        collaborators(),
    )
    .expect("valid");

    let exported = view.export_view().await;
    assert_eq!(exported.agent_url, None);
    assert_eq!(exported.origin_url, None);
    assert_eq!(
        exported.header_short.as_deref(),
        Some("Bob mentioned you with Alice")
    );
    assert_eq!(exported.header_long.as_deref(), Some("Bob and Alice in full"));
    assert_eq!(exported.icons.notification.as_deref(), Some("mention.svg"));
    assert_eq!(exported.category.as_deref(), Some("mention"));
    assert_eq!(exported.importance, 5);

    let message = view.header_short().await.expect("header");
    assert_eq!(message.key, "short-header-mention");
    assert_eq!(
        message
            .params
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>(),
        vec!["Bob", "Alice"]
    );
}

#[tokio::test]
async fn test_agent_and_origin_resolved() {
    let mut rec = record(2, "mention", r#"[[1, "Alice"]]"#);
    rec.agent_id = Some("2".to_string());
    rec.origin_id = Some("dewiki".to_string());

    let exported = NotificationView::new(rec, collaborators())
        .expect("valid")
        .export_view()
        .await;
    assert_eq!(
        exported.agent_url.as_deref(),
        Some("https://meta.example.org/wiki/User:Alice")
    );
    assert_eq!(exported.origin_url.as_deref(), Some("https://de.example.org"));
}

#[tokio::test]
async fn test_uncatalogued_type_degrades() {
    let mut rec = record(3, "welcome", r#"[[0, "legacy"], [2, "Carol"]]"#);
    rec.agent_id = Some("404".to_string());
    rec.origin_id = Some("xxwiki".to_string());

    let exported = NotificationView::new(rec, collaborators())
        .expect("valid")
        .export_view()
        .await;

    assert_eq!(exported.header_short.as_deref(), Some("Welcome, [] Carol"));
    assert_eq!(exported.header_long.as_deref(), Some("⧼long-header-welcome⧽"));
    assert_eq!(exported.icons.notification, None);
    assert_eq!(exported.category, None);
    assert_eq!(exported.agent_url, None);
    assert_eq!(exported.origin_url, None);
    assert_eq!(exported.importance, 0);

    let json = serde_json::to_value(&exported).expect("serialize");
    assert_eq!(json.as_object().map(|o| o.len()), Some(12));
    assert!(json["category"].is_null());
    assert!(json["icons"]["notification"].is_null());
}
