//! Application state store - owns the state, dispatches actions, mirrors to storage

use tracing::{debug, info, warn};

use super::action::Action;
use super::app_state::{AppState, StatusError};
use super::notification::{Notification, NotificationId};
use super::preferences::PreferencesUpdate;
use super::reducer::reduce;
use super::user::{ProgressUpdate, User};
use crate::persistence::{load_preferences, save_navigation, SessionStorage};

/// Storage key for the persisted navigation snapshot
pub const STORAGE_KEY: &str = "navigationState";

type Listener = Box<dyn FnMut(&AppState)>;

/// Single source of truth for the shell's cross-cutting state.
///
/// State changes only through [`dispatch`](Self::dispatch). After every
/// dispatch that changes the active tab, history or preferences, those three
/// fields are written to the injected [`SessionStorage`]. Storage failures are
/// logged and never returned to the caller.
pub struct AppStateStore<S: SessionStorage> {
    state: AppState,
    storage: S,
    storage_key: String,
    listeners: Vec<Listener>,
}

impl<S: SessionStorage> AppStateStore<S> {
    /// Create a store using the default storage key
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    /// Create a store persisting under `storage_key`.
    ///
    /// Preferences found in storage are merged into the initial state. The
    /// stored active tab and history are ignored.
    pub fn with_key(storage: S, storage_key: impl Into<String>) -> Self {
        let mut store = Self {
            state: AppState::default(),
            storage,
            storage_key: storage_key.into(),
            listeners: Vec::new(),
        };
        store.rehydrate();
        store.persist();
        store
    }

    fn rehydrate(&mut self) {
        match load_preferences(&self.storage, &self.storage_key) {
            Ok(Some(update)) if update.is_empty() => debug!("Persisted preferences are empty"),
            Ok(Some(update)) => {
                debug!("Restoring persisted preferences");
                let state = std::mem::take(&mut self.state);
                self.state = reduce(state, Action::UpdatePreferences(update));
            }
            Ok(None) => debug!("No persisted navigation state under '{}'", self.storage_key),
            Err(e) => warn!("Failed to restore navigation state: {}", e),
        }
    }

    fn persist(&mut self) {
        if let Err(e) = save_navigation(&mut self.storage, &self.storage_key, &self.state) {
            warn!("Failed to persist navigation state: {}", e);
        }
    }

    /// Apply an action through the reducer
    pub fn dispatch(&mut self, action: Action) {
        let name = action.name();
        let next = reduce(self.state.clone(), action);
        if next == self.state {
            debug!(action = name, "Action left state unchanged");
            return;
        }

        let persist = next.persisted_fields_differ(&self.state);
        self.state = next;
        debug!(action = name, persist, "Action applied");

        if persist {
            self.persist();
        }
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }

    /// Register a listener called with the new state after each change
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Router hook: activate `path` unless it already is the active tab
    pub fn sync_route(&mut self, path: &str) {
        if self.state.active_tab != path {
            self.set_active_tab(path);
        }
    }

    // === Action helpers ===

    pub fn set_active_tab(&mut self, path: impl Into<String>) {
        self.dispatch(Action::set_active_tab(path));
    }

    pub fn update_user_progress(&mut self, progress: ProgressUpdate) {
        self.dispatch(Action::UpdateUserProgress(progress));
    }

    pub fn add_notification(&mut self, notification: Notification) {
        self.dispatch(Action::AddNotification(notification));
    }

    pub fn mark_notification_read(&mut self, id: NotificationId) {
        self.dispatch(Action::MarkNotificationRead(id));
    }

    pub fn clear_all_notifications(&mut self) {
        self.dispatch(Action::ClearAllNotifications);
    }

    pub fn update_preferences(&mut self, preferences: PreferencesUpdate) {
        self.dispatch(Action::UpdatePreferences(preferences));
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.dispatch(Action::SetLoading(loading));
    }

    pub fn set_error(&mut self, error: Option<StatusError>) {
        self.dispatch(Action::SetError(error));
    }

    pub fn logout(&mut self) {
        info!("Signing out {}", self.state.user.email);
        self.dispatch(Action::logout());
    }

    pub fn login(&mut self, user: User) {
        info!("Signing in {}", user.email);
        self.dispatch(Action::LoginUser(user));
    }

    // === Selectors ===

    /// Current state snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn active_tab(&self) -> &str {
        &self.state.active_tab
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.user.is_authenticated
    }

    pub fn unread_count(&self) -> usize {
        self.state.notifications.count()
    }

    /// Next free notification id
    pub fn next_notification_id(&self) -> NotificationId {
        NotificationId(
            self.state
                .notifications
                .max_id()
                .map(|id| id.0 + 1)
                .unwrap_or(1),
        )
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Tear the store down, handing back its storage
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::Utc;

    use super::*;
    use crate::core::navigation::{DEFAULT_TAB, HISTORY_LIMIT};
    use crate::core::notification::NotificationKind;
    use crate::core::preferences::{Preferences, Theme};
    use crate::persistence::{MemoryStorage, PersistedNavigation};

    fn stored(store: &AppStateStore<MemoryStorage>) -> PersistedNavigation {
        let json = store.storage().get(STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn creation_writes_initial_snapshot() {
        let store = AppStateStore::new(MemoryStorage::new());
        assert_eq!(store.storage().write_count(), 1);
        assert_eq!(stored(&store).active_tab, DEFAULT_TAB);
    }

    #[test]
    fn navigation_is_persisted() {
        let mut store = AppStateStore::new(MemoryStorage::new());
        store.set_active_tab("/mock-interview-scheduler");
        let snapshot = stored(&store);
        assert_eq!(snapshot.active_tab, "/mock-interview-scheduler");
        assert_eq!(snapshot.navigation_history.len(), 1);
    }

    #[test]
    fn unrelated_actions_do_not_write() {
        let mut store = AppStateStore::new(MemoryStorage::new());
        let writes = store.storage().write_count();
        store.set_loading(true);
        store.clear_all_notifications();
        assert_eq!(store.storage().write_count(), writes);
    }

    #[test]
    fn noop_actions_do_not_notify() {
        let mut store = AppStateStore::new(MemoryStorage::new());
        let calls = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&calls);
        store.subscribe(move |_| *seen.borrow_mut() += 1);

        store.mark_notification_read(NotificationId(404));
        assert_eq!(*calls.borrow(), 0);

        store.mark_notification_read(NotificationId(1));
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn sync_route_skips_current_tab() {
        let mut store = AppStateStore::new(MemoryStorage::new());
        store.sync_route(DEFAULT_TAB);
        assert!(store.state().navigation_history.is_empty());

        store.sync_route("/progress-analytics");
        store.sync_route("/progress-analytics");
        assert_eq!(store.state().navigation_history.len(), 1);
        assert_eq!(store.active_tab(), "/progress-analytics");
    }

    #[test]
    fn restores_only_preferences() {
        let mut first = AppStateStore::new(MemoryStorage::new());
        first.set_active_tab("/user-profile-management");
        first.update_preferences(
            PreferencesUpdate::default()
                .theme(Theme::Dark)
                .language("de")
                .sound_enabled(false),
        );
        let preferences = first.state().preferences.clone();

        let second = AppStateStore::new(first.into_storage());
        assert_eq!(second.state().preferences, preferences);
        assert_eq!(second.active_tab(), DEFAULT_TAB);
        assert!(second.state().navigation_history.is_empty());
    }

    #[test]
    fn malformed_snapshot_falls_back_to_defaults() {
        let mut storage = MemoryStorage::new();
        storage.set(STORAGE_KEY, "][").unwrap();

        let store = AppStateStore::new(storage);
        assert_eq!(store.state().preferences, Preferences::default());
        // The startup write replaces the bad value
        assert_eq!(stored(&store).active_tab, DEFAULT_TAB);
    }

    #[test]
    fn invalid_stored_theme_keeps_valid_fields() {
        let mut storage = MemoryStorage::new();
        storage
            .set(
                STORAGE_KEY,
                r#"{"preferences":{"theme":"neon","language":"es","soundEnabled":false}}"#,
            )
            .unwrap();

        let store = AppStateStore::new(storage);
        let preferences = &store.state().preferences;
        assert_eq!(preferences.theme, Theme::Light);
        assert_eq!(preferences.language, "es");
        assert!(!preferences.sound_enabled);
        assert_eq!(stored(&store).preferences.language, "es");
    }

    #[test]
    fn oversized_stored_history_is_capped() {
        let now = Utc::now();
        let entries: Vec<_> = (0..20)
            .map(|i| serde_json::json!({ "path": format!("/page-{}", i), "timestamp": now }))
            .collect();
        let json = serde_json::json!({
            "activeTab": "/page-19",
            "navigationHistory": entries,
            "preferences": Preferences::default(),
        });

        let snapshot: PersistedNavigation = serde_json::from_value(json).unwrap();
        assert_eq!(snapshot.navigation_history.len(), HISTORY_LIMIT);
        assert_eq!(
            snapshot.navigation_history.latest().map(|e| e.path.as_str()),
            Some("/page-19")
        );
    }

    #[test]
    fn storage_failures_are_swallowed() {
        let mut store = AppStateStore::new(MemoryStorage::with_quota(16));
        store.set_active_tab("/dashboard-home");
        store.update_preferences(PreferencesUpdate::default().theme(Theme::System));

        assert_eq!(store.state().preferences.theme, Theme::System);
        assert_eq!(store.storage().write_count(), 0);
    }

    #[test]
    fn listeners_see_new_state() {
        let mut store = AppStateStore::new(MemoryStorage::new());
        let tabs = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&tabs);
        store.subscribe(move |state| sink.borrow_mut().push(state.active_tab.clone()));

        store.set_active_tab("/user-login");
        store.add_notification(Notification::new(
            store.next_notification_id(),
            NotificationKind::System,
            "Welcome",
            "Signed in",
            Utc::now(),
        ));
        assert_eq!(*tabs.borrow(), vec!["/user-login", "/user-login"]);
    }

    #[test]
    fn next_notification_id_follows_max() {
        let mut store = AppStateStore::new(MemoryStorage::new());
        assert_eq!(store.next_notification_id(), NotificationId(4));
        store.add_notification(Notification::new(
            NotificationId(10),
            "system",
            "t",
            "m",
            Utc::now(),
        ));
        assert_eq!(store.next_notification_id(), NotificationId(11));
    }
}
