//! Outcome types for the view's derived lookups.
//!
//! "Not provided" and "not configured" are ordinary values here; failures
//! travel separately as `Err(AppError)`.

use herald_core::types::SiteDescriptor;

/// Result of a per-type configuration lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The type has a configured value.
    Configured(T),
    /// Nothing is configured for the type; the caller's default applies.
    Unconfigured,
}

impl<T> Lookup<T> {
    /// The configured value, if any.
    pub fn configured(self) -> Option<T> {
        match self {
            Self::Configured(value) => Some(value),
            Self::Unconfigured => None,
        }
    }

    /// The configured value, or `default`.
    pub fn value_or(self, default: T) -> T {
        self.configured().unwrap_or(default)
    }
}

/// The agent of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentUrl {
    /// The notification has no agent (e.g. system-generated).
    NoAgent,
    /// Profile URL of the agent.
    Url(String),
}

impl AgentUrl {
    /// The URL, if there is an agent.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::NoAgent => None,
            Self::Url(url) => Some(url),
        }
    }
}

/// Where the notification's event took place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// No origin id was recorded; the event is local.
    Local,
    /// The origin id resolved to a known site.
    Site(SiteDescriptor),
    /// An origin id was recorded but the registry does not know it.
    Unknown(String),
}

impl Origin {
    /// Canonical base URL of the origin site, only for resolved sites.
    pub fn base_url(&self) -> Option<&str> {
        match self {
            Self::Site(site) => Some(site.canonical_base_url()),
            Self::Local | Self::Unknown(_) => None,
        }
    }
}

/// Which header variant to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLength {
    /// Compact header.
    Short,
    /// Full header.
    Long,
}

impl HeaderLength {
    /// Message key prefix for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }

    /// Catalog key for a notification type, e.g. `short-header-mention`.
    pub fn message_key(&self, event_type: &str) -> String {
        format!("{}-header-{event_type}", self.as_str())
    }
}

impl From<bool> for HeaderLength {
    fn from(long: bool) -> Self {
        if long { Self::Long } else { Self::Short }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_default() {
        assert_eq!(Lookup::Configured(5).value_or(0), 5);
        assert_eq!(Lookup::<i64>::Unconfigured.value_or(0), 0);
    }

    #[test]
    fn test_header_keys() {
        assert_eq!(HeaderLength::from(false).message_key("edit"), "short-header-edit");
        assert_eq!(HeaderLength::from(true).message_key("edit"), "long-header-edit");
    }

    #[test]
    fn test_origin_base_url() {
        let site = SiteDescriptor::new("dewiki", "German", "https://de.example.org/");
        assert_eq!(Origin::Site(site).base_url(), Some("https://de.example.org"));
        assert_eq!(Origin::Local.base_url(), None);
        assert_eq!(Origin::Unknown("xxwiki".into()).base_url(), None);
    }
}
