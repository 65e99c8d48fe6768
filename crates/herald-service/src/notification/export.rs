//! Flat, serializable projection of a notification view.

use serde::{Deserialize, Serialize};

/// Icons block of an exported notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedIcons {
    /// Icon for the notification type, `null` if none is configured.
    pub notification: Option<String>,
}

/// A notification flattened for API responses.
///
/// Every field is always serialized; values that could not be derived are
/// `null` rather than omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedNotification {
    /// Icon lookups.
    pub icons: ExportedIcons,
    /// Display category of the type.
    pub category: Option<String>,
    /// Notification id.
    pub id: u64,
    /// Notification type.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Rendered short header.
    pub header_short: Option<String>,
    /// Rendered long header.
    pub header_long: Option<String>,
    /// Creation time, epoch seconds.
    pub created_at: i64,
    /// Read time, epoch seconds; `null` while unread.
    pub read_at: Option<i64>,
    /// Base URL of the origin site; `null` for local or unresolved origins.
    pub origin_url: Option<String>,
    /// Profile URL of the agent; `null` without an agent or on lookup failure.
    pub agent_url: Option<String>,
    /// Deep link to the notification subject.
    pub canonical_url: String,
    /// Display importance; 0 unless configured.
    pub importance: i64,
}
