//! Notification domain entities.

pub mod model;
pub mod params;

pub use model::NotificationRecord;
pub use params::{MAX_SLOT, MessageParameters};
