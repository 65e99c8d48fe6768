//! Collaborator traits defined in `herald-core` and implemented by
//! integrations (see `herald-providers` for the config-backed ones).

pub mod categorizer;
pub mod catalog;
pub mod config_store;
pub mod directory;
pub mod registry;

pub use catalog::MessageCatalog;
pub use categorizer::Categorizer;
pub use config_store::ConfigStore;
pub use directory::UserDirectory;
pub use registry::WikiRegistry;
