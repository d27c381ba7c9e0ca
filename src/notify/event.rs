use serde::{Deserialize, Serialize};

use super::models::{NotificationBody, NotificationParams};

/// How the notification reached the experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationOrigin {
    /// Arrived while the experience was in the foreground
    Received,
    /// Opened by the user from the background
    Selected,
}

/// Event emitted to an experience's notification listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    pub origin: NotificationOrigin,
    pub data: NotificationBody,
    pub remote: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_text: Option<String>,
}

impl From<&NotificationParams> for NotificationEvent {
    fn from(params: &NotificationParams) -> Self {
        let origin = match params.is_from_background() {
            Some(true) => NotificationOrigin::Selected,
            _ => NotificationOrigin::Received,
        };

        Self {
            origin,
            data: params.body().clone(),
            // Unknown origin is treated as a local notification
            remote: params.is_remote().unwrap_or(false),
            action_id: params.action_id().map(str::to_string),
            user_text: params.user_text().map(str::to_string),
        }
    }
}
