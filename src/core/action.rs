//! Actions - the only way to change store state

use chrono::{DateTime, Utc};

use super::app_state::StatusError;
use super::notification::{Notification, NotificationId};
use super::preferences::PreferencesUpdate;
use super::user::{ProgressUpdate, User};

/// A request to transition the store's state.
///
/// Variants that need the current time carry it, so [`reduce`](super::reduce)
/// stays a pure function. Use the constructors to stamp `Utc::now()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Make `path` the active tab and record it in the history
    SetActiveTab { path: String, at: DateTime<Utc> },
    /// Shallow-merge into `user.progress`
    UpdateUserProgress(ProgressUpdate),
    /// Prepend a notification; it is stored unread
    AddNotification(Notification),
    /// Mark one notification read
    MarkNotificationRead(NotificationId),
    /// Mark every notification read
    ClearAllNotifications,
    /// Shallow-merge into `preferences`
    UpdatePreferences(PreferencesUpdate),
    SetLoading(bool),
    /// Set or clear the error; always clears `loading`
    SetError(Option<StatusError>),
    /// Reset everything to the initial state, signed out
    LogoutUser { at: DateTime<Utc> },
    /// Replace the user and mark them authenticated
    LoginUser(User),
}

impl Action {
    pub fn set_active_tab(path: impl Into<String>) -> Self {
        Self::SetActiveTab {
            path: path.into(),
            at: Utc::now(),
        }
    }

    pub fn logout() -> Self {
        Self::LogoutUser { at: Utc::now() }
    }

    /// Stable name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetActiveTab { .. } => "SET_ACTIVE_TAB",
            Self::UpdateUserProgress(_) => "UPDATE_USER_PROGRESS",
            Self::AddNotification(_) => "ADD_NOTIFICATION",
            Self::MarkNotificationRead(_) => "MARK_NOTIFICATION_READ",
            Self::ClearAllNotifications => "CLEAR_ALL_NOTIFICATIONS",
            Self::UpdatePreferences(_) => "UPDATE_USER_PREFERENCES",
            Self::SetLoading(_) => "SET_LOADING",
            Self::SetError(_) => "SET_ERROR",
            Self::LogoutUser { .. } => "LOGOUT_USER",
            Self::LoginUser(_) => "LOGIN_USER",
        }
    }
}
