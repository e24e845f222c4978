//! Store-level properties over whole action sequences

use chrono::{Duration, Utc};
use navstate::core::{
    reduce, Action, AppState, AppStateStore, Notification, NotificationId, NotificationKind,
    PreferencesUpdate, Theme, User, UserId, DEFAULT_TAB, HISTORY_LIMIT,
};
use navstate::persistence::MemoryStorage;

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(u64),
    Mark(u64),
    ClearAll,
}

const OPS: &[Op] = &[
    Op::Add(1),
    Op::Add(2),
    Op::Add(3),
    Op::Mark(1),
    Op::Mark(2),
    Op::Mark(9),
    Op::ClearAll,
];

fn to_action(op: Op) -> Action {
    match op {
        Op::Add(id) => Action::AddNotification(Notification::new(
            NotificationId(id),
            NotificationKind::Interview,
            "Reminder",
            "Practice session",
            Utc::now(),
        )),
        Op::Mark(id) => Action::MarkNotificationRead(NotificationId(id)),
        Op::ClearAll => Action::ClearAllNotifications,
    }
}

fn assert_consistent(state: &AppState, ops: &[Op]) {
    let unread = state.notifications.unread().count();
    assert_eq!(
        state.notifications.count(),
        unread,
        "count drifted after {:?}",
        ops
    );
}

/// Every sequence of up to five inbox operations keeps `count` equal to the unread items
#[test]
fn unread_count_matches_items_for_all_short_sequences() {
    let start = AppState::initial_at(Utc::now());
    let mut frontier: Vec<(Vec<Op>, AppState)> = vec![(Vec::new(), start)];

    for _ in 0..5 {
        let mut next = Vec::with_capacity(frontier.len() * OPS.len());
        for (ops, state) in &frontier {
            for &op in OPS {
                let state = reduce(state.clone(), to_action(op));
                let mut ops = ops.clone();
                ops.push(op);
                assert_consistent(&state, &ops);
                next.push((ops, state));
            }
        }
        frontier = next;
    }
    assert_eq!(frontier.len(), OPS.len().pow(5));
}

#[test]
fn history_keeps_ten_most_recent_in_call_order() {
    let mut store = AppStateStore::new(MemoryStorage::new());
    let paths: Vec<String> = (0..37).map(|i| format!("/route-{}", i)).collect();
    for path in &paths {
        store.set_active_tab(path.clone());
        assert!(store.state().navigation_history.len() <= HISTORY_LIMIT);
    }

    let retained: Vec<&str> = store.state().navigation_history.paths();
    let expected: Vec<&str> = paths[paths.len() - HISTORY_LIMIT..]
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(retained, expected);
}

#[test]
fn history_timestamps_are_ordered() {
    let start = Utc::now();
    let mut state = AppState::initial_at(start);
    for i in 0..12 {
        state = reduce(
            state,
            Action::SetActiveTab {
                path: format!("/step-{}", i),
                at: start + Duration::milliseconds(i),
            },
        );
    }
    let stamps: Vec<_> = state.navigation_history.iter().map(|e| e.timestamp).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn unknown_notification_id_leaves_store_unchanged() {
    let mut store = AppStateStore::new(MemoryStorage::new());
    let before = store.state().clone();
    store.mark_notification_read(NotificationId(12345));
    assert_eq!(store.state(), &before);
}

#[test]
fn scenario_two_adds_then_mark_first() {
    let mut store = AppStateStore::new(MemoryStorage::new());
    store.clear_all_notifications();
    let baseline = store.state().notifications.len();

    for id in [101, 102] {
        store.add_notification(Notification::new(
            NotificationId(id),
            NotificationKind::System,
            format!("Notice {}", id),
            "details",
            Utc::now(),
        ));
    }
    store.mark_notification_read(NotificationId(101));

    let inbox = &store.state().notifications;
    assert_eq!(inbox.count(), 1);
    assert_eq!(inbox.items()[0].id, NotificationId(102));
    assert!(inbox.get(NotificationId(101)).unwrap().read);
    assert_eq!(inbox.len(), baseline + 2);
}

#[test]
fn preferences_survive_a_reload_but_navigation_does_not() {
    let mut store = AppStateStore::new(MemoryStorage::new());
    store.set_active_tab("/progress-analytics");
    store.set_active_tab("/user-profile-management");
    store.update_preferences(
        PreferencesUpdate::default()
            .theme(Theme::Dark)
            .notifications(false)
            .language("es"),
    );
    let preferences = store.state().preferences.clone();

    let reloaded = AppStateStore::new(store.into_storage());
    assert_eq!(reloaded.state().preferences, preferences);
    assert_eq!(reloaded.active_tab(), DEFAULT_TAB);
    assert!(reloaded.state().navigation_history.is_empty());
}

#[test]
fn logout_then_login_yields_the_new_user() {
    let mut store = AppStateStore::new(MemoryStorage::new());
    store.set_active_tab("/mock-interview-scheduler");
    store.logout();
    assert!(!store.is_authenticated());
    assert!(store.state().navigation_history.is_empty());

    let user = User::new(UserId(9), "Lin", "lin@example.com").with_avatar("/avatars/lin.png");
    store.login(user.clone());

    let expected = User {
        is_authenticated: true,
        ..user
    };
    assert_eq!(store.state().user, expected);
    assert!(store.state().navigation_history.is_empty());
}
