//! Reducer - pure transition function over [`AppState`]

use super::action::Action;
use super::app_state::AppState;
use super::navigation::NavigationEntry;
use super::user::User;

/// Compute the next state from the current state and an action.
///
/// Total and side-effect free: every action is accepted in every state, and
/// payloads that reference nothing (an unknown notification id) leave the
/// state unchanged.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::SetActiveTab { path, at } => {
            let mut next = state;
            next.navigation_history.push(NavigationEntry::new(path.clone(), at));
            next.active_tab = path;
            next
        }

        Action::UpdateUserProgress(update) => {
            let mut next = state;
            next.user.progress = next.user.progress.merge(update);
            next
        }

        Action::AddNotification(notification) => {
            let mut next = state;
            next.notifications.push_front(notification);
            next
        }

        Action::MarkNotificationRead(id) => {
            let mut next = state;
            next.notifications.mark_read(id);
            next
        }

        Action::ClearAllNotifications => {
            let mut next = state;
            next.notifications.mark_all_read();
            next
        }

        Action::UpdatePreferences(update) => {
            let mut next = state;
            next.preferences = next.preferences.merge(update);
            next
        }

        Action::SetLoading(loading) => AppState { loading, ..state },

        Action::SetError(error) => AppState {
            error,
            loading: false,
            ..state
        },

        Action::LogoutUser { at } => {
            let mut next = AppState::initial_at(at);
            next.user.is_authenticated = false;
            next
        }

        Action::LoginUser(user) => AppState {
            user: User {
                is_authenticated: true,
                ..user
            },
            ..state
        },
    }
}
