use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Notification payload content. Keys keep their insertion order.
pub type NotificationBody = Map<String, Value>;

/// Parameters describing a notification handed to an experience.
///
/// Every field is assigned once by [`NotificationParams::new`] and only
/// exposed through accessors afterwards. Nothing is validated or
/// defaulted: an absent flag or string stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationParams {
    experience_id: String,
    body: NotificationBody,
    is_remote: Option<bool>,
    is_from_background: Option<bool>,
    action_id: Option<String>,
    user_text: Option<String>,
}

impl NotificationParams {
    /// The body is moved in, so later changes to a caller's copy of the
    /// mapping never reach the stored one.
    pub fn new(
        experience_id: impl Into<String>,
        body: NotificationBody,
        is_remote: Option<bool>,
        is_from_background: Option<bool>,
        action_id: Option<String>,
        user_text: Option<String>,
    ) -> Self {
        Self {
            experience_id: experience_id.into(),
            body,
            is_remote,
            is_from_background,
            action_id,
            user_text,
        }
    }

    pub fn experience_id(&self) -> &str {
        &self.experience_id
    }

    pub fn body(&self) -> &NotificationBody {
        &self.body
    }

    pub fn is_remote(&self) -> Option<bool> {
        self.is_remote
    }

    pub fn is_from_background(&self) -> Option<bool> {
        self.is_from_background
    }

    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    pub fn user_text(&self) -> Option<&str> {
        self.user_text.as_deref()
    }
}
