//! The notification view-model.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use herald_core::error::AppError;
use herald_core::result::AppResult;
use herald_core::types::RenderableMessage;
use herald_entity::notification::{MessageParameters, NotificationRecord};

use super::collaborators::Collaborators;
use super::export::{ExportedIcons, ExportedNotification};
use super::lookup::{AgentUrl, HeaderLength, Lookup, Origin};

/// Config key of the per-type notification icon map.
pub const NOTIFICATION_ICONS_KEY: &str = "icons.notification";

/// Config key of the per-type importance map.
pub const IMPORTANCE_KEY: &str = "Notiheze.importance";

/// A stored notification plus the collaborators needed to present it.
///
/// Views are immutable; every accessor is a pure read of the record or a
/// single collaborator call.
#[derive(Debug, Clone)]
pub struct NotificationView {
    record: NotificationRecord,
    collaborators: Arc<Collaborators>,
}

impl NotificationView {
    /// Wrap a stored record, checking its invariants.
    pub fn new(record: NotificationRecord, collaborators: Arc<Collaborators>) -> AppResult<Self> {
        record.validate()?;
        Ok(Self {
            record,
            collaborators,
        })
    }

    pub fn id(&self) -> u64 {
        self.record.id
    }

    pub fn event_type(&self) -> &str {
        &self.record.event_type
    }

    pub fn message(&self) -> &str {
        &self.record.message
    }

    pub fn canonical_url(&self) -> &str {
        &self.record.canonical_url
    }

    pub fn creation(&self) -> i64 {
        self.record.creation
    }

    /// Read timestamp; 0 while unread.
    pub fn read(&self) -> i64 {
        self.record.read
    }

    pub fn is_read(&self) -> bool {
        self.record.is_read()
    }

    pub fn origin_id(&self) -> Option<&str> {
        self.record.origin_id.as_deref()
    }

    pub fn agent_id(&self) -> Option<&str> {
        self.record.agent_id.as_deref()
    }

    /// Decoded message parameters in ascending numeric slot order.
    pub fn message_parameters(&self) -> AppResult<MessageParameters> {
        MessageParameters::decode(&self.record.message)
    }

    /// Renumber legacy parameter sets so that rendering starts at slot 1.
    ///
    /// See [`MessageParameters::normalize_keys`].
    pub fn normalize_array_keys(parameters: MessageParameters) -> MessageParameters {
        parameters.normalize_keys()
    }

    /// Select and bind the header message of the given length.
    pub async fn header(&self, length: HeaderLength) -> AppResult<RenderableMessage> {
        let key = length.message_key(self.event_type());
        let params = Self::normalize_array_keys(self.message_parameters()?).ordered_values();

        debug!(notification_id = self.id(), key = %key, params = params.len(), "Rendering header");
        self.collaborators.catalog.render(&key, &params).await
    }

    pub async fn header_short(&self) -> AppResult<RenderableMessage> {
        self.header(HeaderLength::Short).await
    }

    pub async fn header_long(&self) -> AppResult<RenderableMessage> {
        self.header(HeaderLength::Long).await
    }

    /// Profile URL of the agent.
    ///
    /// Without an agent the directory is not consulted. A directory that
    /// cannot resolve the id fails the call.
    pub async fn agent_url(&self) -> AppResult<AgentUrl> {
        let Some(raw) = self.agent_id() else {
            return Ok(AgentUrl::NoAgent);
        };

        let agent_id: u64 = raw.trim().parse().map_err(|_| {
            AppError::data_format(format!(
                "Notification {} has a non-numeric agent id '{raw}'",
                self.id()
            ))
        })?;

        let url = self.collaborators.users.resolve_profile_url(agent_id).await?;
        Ok(AgentUrl::Url(url))
    }

    /// Site the event originated on.
    ///
    /// Without an origin id the registry is not consulted.
    pub async fn origin(&self) -> AppResult<Origin> {
        let Some(origin_id) = self.origin_id() else {
            return Ok(Origin::Local);
        };

        match self.collaborators.wikis.resolve(origin_id).await? {
            Some(site) => Ok(Origin::Site(site)),
            None => {
                debug!(notification_id = self.id(), origin_id, "Origin not in registry");
                Ok(Origin::Unknown(origin_id.to_string()))
            }
        }
    }

    /// Base URL of the origin site; `None` for local or unknown origins.
    pub async fn origin_url(&self) -> AppResult<Option<String>> {
        Ok(self.origin().await?.base_url().map(str::to_string))
    }

    /// Icon configured for this notification type.
    pub async fn notification_icon(&self) -> AppResult<Lookup<String>> {
        match self.type_setting(NOTIFICATION_ICONS_KEY).await? {
            Some(Value::String(icon)) => Ok(Lookup::Configured(icon)),
            Some(other) => Err(AppError::configuration(format!(
                "Icon for '{}' must be a string, got {other}",
                self.event_type()
            ))),
            None => Ok(Lookup::Unconfigured),
        }
    }

    /// Importance configured for this notification type.
    ///
    /// Use `importance().await?.value_or(0)` for the display default.
    pub async fn importance(&self) -> AppResult<Lookup<i64>> {
        match self.type_setting(IMPORTANCE_KEY).await? {
            Some(value) => value.as_i64().map(Lookup::Configured).ok_or_else(|| {
                AppError::configuration(format!(
                    "Importance for '{}' must be an integer, got {value}",
                    self.event_type()
                ))
            }),
            None => Ok(Lookup::Unconfigured),
        }
    }

    /// Display category of this notification type.
    pub async fn category(&self) -> AppResult<String> {
        self.collaborators
            .categorizer
            .map_type_to_category(self.event_type())
            .await
    }

    /// Flatten the view for external consumption.
    ///
    /// Never fails: anything that cannot be derived is logged and exported
    /// as `null` (importance as 0).
    pub async fn export_view(&self) -> ExportedNotification {
        let icon = self
            .degrade("icon", self.notification_icon().await)
            .and_then(Lookup::configured);
        let category = self.degrade("category", self.category().await);
        let header_short = self
            .degrade("short header", self.header_short().await)
            .map(|m| m.text());
        let header_long = self
            .degrade("long header", self.header_long().await)
            .map(|m| m.text());
        let origin_url = self
            .degrade("origin url", self.origin_url().await)
            .flatten();
        let agent_url = self
            .degrade("agent url", self.agent_url().await)
            .and_then(|agent| agent.url().map(str::to_string));
        let importance = self
            .degrade("importance", self.importance().await)
            .map_or(0, |lookup| lookup.value_or(0));

        ExportedNotification {
            icons: ExportedIcons { notification: icon },
            category,
            id: self.id(),
            event_type: self.event_type().to_string(),
            header_short,
            header_long,
            created_at: self.creation(),
            read_at: self.is_read().then_some(self.read()),
            origin_url,
            agent_url,
            canonical_url: self.canonical_url().to_string(),
            importance,
        }
    }

    /// Look up `key` in the config store and index it by this view's type.
    async fn type_setting(&self, key: &str) -> AppResult<Option<Value>> {
        match self.collaborators.config.get(key).await? {
            None => Ok(None),
            Some(Value::Object(mut map)) => Ok(map.remove(self.event_type())),
            Some(other) => Err(AppError::configuration(format!(
                "Config '{key}' must be a table, got {other}"
            ))),
        }
    }

    fn degrade<T>(&self, what: &str, result: AppResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(
                    notification_id = self.id(),
                    error = %e,
                    "Could not derive {what}, exporting null"
                );
                None
            }
        }
    }
}
