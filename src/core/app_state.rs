//! Application state - The single record held by the store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::navigation::{NavigationHistory, DEFAULT_TAB};
use super::notification::{Notification, NotificationId, NotificationInbox, NotificationKind};
use super::preferences::Preferences;
use super::user::{User, UserId, UserProgress};

/// Application-level error passed through `SetError`.
///
/// The store never interprets it; the shell only displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl StatusError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Cross-cutting UI state for the shell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Current route path
    pub active_tab: String,
    /// Signed-in user
    pub user: User,
    /// Notification inbox
    pub notifications: NotificationInbox,
    /// Recently visited routes
    pub navigation_history: NavigationHistory,
    /// Persisted preferences
    pub preferences: Preferences,
    /// A request is in flight
    pub loading: bool,
    /// Last application error
    pub error: Option<StatusError>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial_at(Utc::now())
    }
}

impl AppState {
    /// Initial state of a freshly loaded shell, with seed notifications stamped `now`
    pub fn initial_at(now: DateTime<Utc>) -> Self {
        Self {
            active_tab: DEFAULT_TAB.to_string(),
            user: default_user(),
            notifications: NotificationInbox::from_items(seed_notifications(now)),
            navigation_history: NavigationHistory::new(),
            preferences: Preferences::default(),
            loading: false,
            error: None,
        }
    }

    /// Whether the persisted slice differs between two states
    pub fn persisted_fields_differ(&self, other: &AppState) -> bool {
        self.active_tab != other.active_tab
            || self.navigation_history != other.navigation_history
            || self.preferences != other.preferences
    }
}

fn default_user() -> User {
    User {
        id: UserId(1),
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        avatar: "/assets/images/avatar.jpg".to_string(),
        is_authenticated: true,
        progress: UserProgress {
            completed_interviews: 3,
            total_interviews: 5,
            weekly_goal: 5,
            achievements: ["First Interview", "Week Streak", "Perfect Score"]
                .into_iter()
                .map(String::from)
                .collect(),
        },
    }
}

fn seed_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification::new(
            NotificationId(1),
            NotificationKind::Interview,
            "Interview Reminder",
            "Mock interview scheduled for tomorrow at 2:00 PM",
            now,
        ),
        Notification::new(
            NotificationId(2),
            NotificationKind::Achievement,
            "Achievement Unlocked!",
            "You completed your first week of practice",
            now,
        ),
        Notification::new(
            NotificationId(3),
            NotificationKind::System,
            "Profile Update",
            "Please update your profile information",
            now,
        ),
    ]
}
