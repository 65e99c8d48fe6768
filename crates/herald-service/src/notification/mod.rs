//! Notification view derivation and export.

pub mod collaborators;
pub mod export;
pub mod lookup;
pub mod view;

pub use collaborators::{Collaborators, CollaboratorsBuilder};
pub use export::{ExportedIcons, ExportedNotification};
pub use lookup::{AgentUrl, HeaderLength, Lookup, Origin};
pub use view::NotificationView;
