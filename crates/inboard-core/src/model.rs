//! Row types for the `dashboards` and `user_states` tables

use serde::{Deserialize, Serialize};

/// Dashboard list entry as fetched by the viewer (no content column)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMeta {
    pub id: String,
    pub title: String,
    pub updated_at: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Full dashboard row as upserted by the sync tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardRow {
    pub id: String,
    pub title: String,
    pub content: String,
    pub hash: String,
    pub updated_at: String,
}

/// Per-user read/archived flags for one dashboard
///
/// A dashboard with no row in `user_states` is unread and unarchived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_archived: bool,
}

/// User state row as fetched for the signed-in user
#[derive(Debug, Clone, Deserialize)]
pub struct UserStateRecord {
    pub dashboard_id: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_archived: bool,
}

impl UserStateRecord {
    pub fn state(&self) -> UserState {
        UserState {
            is_read: self.is_read,
            is_archived: self.is_archived,
        }
    }
}

/// Partial upsert payload for `user_states`, keyed by (user_id, dashboard_id)
///
/// Flags left as `None` are omitted from the payload so an is_read upsert
/// never clobbers is_archived and vice versa (merge-duplicates semantics).
#[derive(Debug, Clone, Serialize)]
pub struct UserStateRow {
    pub user_id: String,
    pub dashboard_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
}

impl UserStateRow {
    pub fn mark_read(user_id: &str, dashboard_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            dashboard_id: dashboard_id.to_string(),
            is_read: Some(true),
            is_archived: None,
        }
    }

    pub fn set_archived(user_id: &str, dashboard_id: &str, archived: bool) -> Self {
        Self {
            user_id: user_id.to_string(),
            dashboard_id: dashboard_id.to_string(),
            is_read: None,
            is_archived: Some(archived),
        }
    }
}
