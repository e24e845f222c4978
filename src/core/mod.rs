//! Core module - Application state, actions, the reducer and the store

mod action;
mod app_state;
pub mod navigation;
pub mod notification;
pub mod preferences;
mod reducer;
mod store;
pub mod user;

pub use action::Action;
pub use app_state::{AppState, StatusError};
pub use navigation::{NavigationEntry, NavigationHistory, DEFAULT_TAB, HISTORY_LIMIT};
pub use notification::{Notification, NotificationId, NotificationInbox, NotificationKind};
pub use preferences::{Preferences, PreferencesUpdate, Theme};
pub use reducer::reduce;
pub use store::{AppStateStore, STORAGE_KEY};
pub use user::{ProgressUpdate, User, UserId, UserProgress};
