//! Notification record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use herald_core::error::AppError;

/// A stored notification, as loaded by whatever persistence layer the
/// integration uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// Unique notification identifier.
    pub id: u64,
    /// Notification type key, e.g. `"edit"` or `"mention"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// JSON-encoded list of `[slot, value]` message parameters.
    #[serde(default)]
    pub message: String,
    /// Stable deep link to the subject of the notification.
    #[serde(default)]
    pub canonical_url: String,
    /// When the underlying event occurred (epoch seconds).
    pub creation: i64,
    /// When the notification was read (epoch seconds); 0 means unread.
    #[serde(default)]
    pub read: i64,
    /// Site the event originated on; `None` means the local site.
    #[serde(default)]
    pub origin_id: Option<String>,
    /// User who triggered the event; `None` for system notifications.
    #[serde(default)]
    pub agent_id: Option<String>,
}

impl NotificationRecord {
    /// Check the record's structural invariants.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.event_type.trim().is_empty() {
            return Err(AppError::validation(format!(
                "Notification {} has an empty type",
                self.id
            )));
        }
        if self.creation < 0 {
            return Err(AppError::validation(format!(
                "Notification {} has a negative creation timestamp",
                self.id
            )));
        }
        if self.read < 0 {
            return Err(AppError::validation(format!(
                "Notification {} has a negative read timestamp",
                self.id
            )));
        }
        Ok(())
    }

    /// Check if the notification has been read.
    pub fn is_read(&self) -> bool {
        self.read > 0
    }

    /// Creation time as a UTC timestamp.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.creation, 0)
    }

    /// Read time as a UTC timestamp; `None` while unread.
    pub fn read_at(&self) -> Option<DateTime<Utc>> {
        if self.is_read() {
            DateTime::<Utc>::from_timestamp(self.read, 0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> NotificationRecord {
        NotificationRecord {
            id: 7,
            event_type: "mention".to_string(),
            message: "[[1,\"Bob\"]]".to_string(),
            canonical_url: "https://example.org/wiki/Talk:Main".to_string(),
            creation: 1_700_000_000,
            read: 0,
            origin_id: None,
            agent_id: Some("42".to_string()),
        }
    }

    #[test]
    fn test_deserialize_uses_type_key() {
        let json = r#"{"id": 3, "type": "edit", "creation": 10}"#;
        let parsed: NotificationRecord = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.event_type, "edit");
        assert_eq!(parsed.read, 0);
        assert!(parsed.origin_id.is_none());
        assert!(parsed.message.is_empty());
    }

    #[test]
    fn test_validate() {
        assert!(record().validate().is_ok());

        let mut empty_type = record();
        empty_type.event_type = "  ".to_string();
        assert!(empty_type.validate().is_err());

        let mut negative = record();
        negative.creation = -1;
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_read_state() {
        let mut rec = record();
        assert!(!rec.is_read());
        assert!(rec.read_at().is_none());

        rec.read = 1_700_000_100;
        assert!(rec.is_read());
        assert_eq!(rec.read_at().map(|t| t.timestamp()), Some(1_700_000_100));
        assert_eq!(rec.created_at().map(|t| t.timestamp()), Some(1_700_000_000));
    }
}
