//! In-memory application state for the viewer
//!
//! Holds the fetched dashboard list, the signed-in user's per-dashboard
//! flags, and the archive-view toggle. Rebuilt from scratch on every fetch;
//! nothing here is persisted beyond the page session.

use std::collections::HashMap;

use crate::auth::AuthUser;
use crate::model::{DashboardMeta, UserState, UserStateRecord};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub dashboards: Vec<DashboardMeta>,
    user_state: HashMap<String, UserState>,
    pub user: Option<AuthUser>,
    pub showing_archive: bool,
    selected: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dashboard list, preserving user state and selection
    pub fn set_dashboards(&mut self, dashboards: Vec<DashboardMeta>) {
        self.dashboards = dashboards;
    }

    /// Replace the user-state map from freshly fetched rows
    pub fn set_user_states(&mut self, records: Vec<UserStateRecord>) {
        self.user_state = records
            .into_iter()
            .map(|r| (r.dashboard_id.clone(), r.state()))
            .collect();
    }

    /// Flags for a dashboard, defaulting to unread/unarchived
    pub fn state_of(&self, id: &str) -> UserState {
        self.user_state.get(id).copied().unwrap_or_default()
    }

    /// Dashboards visible in the current view, in fetch order
    ///
    /// Archived items appear only in the archive view, everything else only
    /// in the inbox view.
    pub fn visible(&self) -> Vec<&DashboardMeta> {
        self.dashboards
            .iter()
            .filter(|d| self.state_of(&d.id).is_archived == self.showing_archive)
            .collect()
    }

    /// Archived count over the full list, independent of the current view
    pub fn archived_count(&self) -> usize {
        self.dashboards
            .iter()
            .filter(|d| self.state_of(&d.id).is_archived)
            .count()
    }

    /// Optimistically flip the archived flag
    pub fn set_archived(&mut self, id: &str, archived: bool) {
        self.user_state.entry(id.to_string()).or_default().is_archived = archived;
    }

    /// Mark a dashboard read, returning true only on the unread-to-read
    /// transition so the caller issues the remote write exactly once
    pub fn mark_read(&mut self, id: &str) -> bool {
        let state = self.user_state.entry(id.to_string()).or_default();
        if state.is_read {
            false
        } else {
            state.is_read = true;
            true
        }
    }

    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Drop the signed-in user and their flags (sign-out)
    pub fn clear_user(&mut self) {
        self.user = None;
        self.user_state.clear();
    }
}
