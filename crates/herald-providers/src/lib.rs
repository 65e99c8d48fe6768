//! # herald-providers
//!
//! Implementations of the `herald-core` collaborator traits backed by the
//! loaded [`AppConfig`](herald_core::config::AppConfig). They are enough
//! to run the CLI against a static TOML setup and serve as reference
//! implementations for tests.

pub mod catalog;
pub mod categorizer;
pub mod directory;
pub mod registry;
pub mod store;

pub use catalog::TemplateCatalog;
pub use categorizer::MappedCategorizer;
pub use directory::ConfigUserDirectory;
pub use registry::ConfigWikiRegistry;
pub use store::TreeConfigStore;
