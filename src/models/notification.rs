//! Notification model.

use serde::{Deserialize, Serialize};

/// An in-app notification for the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user: i64,

    /// Free-form type tag set by the backend (e.g. `status_change`).
    #[serde(alias = "type")]
    pub notification_type: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub related_application: Option<i64>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Number of unread notifications.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}
