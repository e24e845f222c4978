//! Text rendering of the shell chrome: header, tab bar, inbox and history

use crate::core::{AppState, NavigationHistory, NotificationInbox};

/// A bottom-bar tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub label: &'static str,
    pub path: &'static str,
    pub tooltip: &'static str,
}

/// Tabs shown in the navigation bar
pub const TABS: &[Tab] = &[
    Tab {
        label: "Home",
        path: "/dashboard-home",
        tooltip: "Dashboard overview and quick actions",
    },
    Tab {
        label: "Practice",
        path: "/mock-interview-scheduler",
        tooltip: "Schedule and manage mock interviews",
    },
    Tab {
        label: "Progress",
        path: "/progress-analytics",
        tooltip: "View your learning analytics and achievements",
    },
    Tab {
        label: "Profile",
        path: "/user-profile-management",
        tooltip: "Manage your account and preferences",
    },
];

/// Look a tab up by label (case-insensitive) or path
pub fn find_tab(target: &str) -> Option<&'static Tab> {
    TABS.iter()
        .find(|tab| tab.label.eq_ignore_ascii_case(target) || tab.path == target)
}

/// `Home | [Practice] | Progress | Profile`
pub fn render_tab_bar(active_tab: &str) -> String {
    TABS.iter()
        .map(|tab| {
            if tab.path == active_tab {
                format!("[{}]", tab.label)
            } else {
                tab.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render_header(state: &AppState) -> String {
    let user = &state.user;
    let mut header = if user.is_authenticated {
        format!("{} <{}>", user.name, user.email)
    } else {
        "Signed out".to_string()
    };

    let unread = state.notifications.count();
    if unread > 0 {
        header.push_str(&format!("  ({} unread)", unread));
    }
    if state.loading {
        header.push_str("  loading...");
    }
    if let Some(error) = &state.error {
        header.push_str(&format!("  error: {}", error));
    }
    header
}

pub fn render_progress(state: &AppState) -> String {
    let progress = &state.user.progress;
    format!(
        "progress: {}/{} interviews ({}%), weekly goal {}{}",
        progress.completed_interviews,
        progress.total_interviews,
        progress.completion_percent(),
        progress.weekly_goal,
        if progress.weekly_goal_met() { " met" } else { "" }
    )
}

pub fn render_notifications(inbox: &NotificationInbox) -> String {
    if inbox.is_empty() {
        return "no notifications".to_string();
    }
    inbox
        .items()
        .iter()
        .map(|item| {
            format!(
                "{} #{} [{}] {}: {}",
                if item.read { " " } else { "*" },
                item.id,
                item.kind.label(),
                item.title,
                item.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_history(history: &NavigationHistory) -> String {
    if history.is_empty() {
        return "no navigation history".to_string();
    }
    history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{:>2}. {} ({})",
                i + 1,
                entry.path,
                entry.timestamp.format("%H:%M:%S")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full screen: header, tab bar, prefs and progress
pub fn render_state(state: &AppState) -> String {
    let prefs = &state.preferences;
    format!(
        "{}\n{}\nactive: {}\ntheme: {}, notifications: {}, sound: {}, language: {}\n{}",
        render_header(state),
        render_tab_bar(&state.active_tab),
        state.active_tab,
        prefs.theme.label(),
        on_off(prefs.notifications),
        on_off(prefs.sound_enabled),
        prefs.language,
        render_progress(state)
    )
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
