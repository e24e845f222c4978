//! Navigation snapshot - the JSON record mirrored to session storage

use serde::{Deserialize, Serialize};

use super::{PersistError, SessionStorage};
use crate::core::{AppState, NavigationHistory, Preferences, PreferencesUpdate};

/// The persisted slice of [`AppState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedNavigation {
    pub active_tab: String,
    pub navigation_history: NavigationHistory,
    pub preferences: Preferences,
}

impl PersistedNavigation {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            active_tab: state.active_tab.clone(),
            navigation_history: state.navigation_history.clone(),
            preferences: state.preferences.clone(),
        }
    }
}

/// What restoration reads back. Only `preferences` is used; other keys are
/// ignored, and a missing or partial `preferences` object is accepted.
#[derive(Debug, Deserialize)]
struct RestoredNavigation {
    #[serde(default)]
    preferences: Option<PreferencesUpdate>,
}

/// Serialize the persisted slice of `state` and write it under `key`
pub fn save_navigation<S: SessionStorage + ?Sized>(
    storage: &mut S,
    key: &str,
    state: &AppState,
) -> Result<(), PersistError> {
    let json = serde_json::to_string(&PersistedNavigation::from_state(state))?;
    storage.set(key, &json)?;
    Ok(())
}

/// Read the preferences stored under `key`, if any
pub fn load_preferences<S: SessionStorage + ?Sized>(
    storage: &S,
    key: &str,
) -> Result<Option<PreferencesUpdate>, PersistError> {
    let Some(json) = storage.get(key)? else {
        return Ok(None);
    };
    let restored: RestoredNavigation = serde_json::from_str(&json)?;
    Ok(restored.preferences)
}
