//! User preferences - the only state that survives a reload

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Application theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark, Theme::System]
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::all()
            .iter()
            .copied()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown theme '{}'", s))
    }
}

/// Persisted UI preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Colour theme
    pub theme: Theme,
    /// Whether notifications are shown
    pub notifications: bool,
    /// Play sound on notifications
    pub sound_enabled: bool,
    /// UI language code
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            notifications: true,
            sound_enabled: true,
            language: "en".to_string(),
        }
    }
}

impl Preferences {
    /// Shallow-merge a partial update
    pub fn merge(mut self, update: PreferencesUpdate) -> Self {
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(notifications) = update.notifications {
            self.notifications = notifications;
        }
        if let Some(sound_enabled) = update.sound_enabled {
            self.sound_enabled = sound_enabled;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
        self
    }
}

/// Partial preferences payload for `UpdatePreferences`.
///
/// Also the shape read back from session storage, so a stored object with
/// missing keys still merges. A field holding a value of the wrong shape
/// (an unknown theme, a string where a bool belongs) is logged and left unset;
/// the other fields are still read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesUpdate {
    #[serde(deserialize_with = "lenient")]
    pub theme: Option<Theme>,
    #[serde(deserialize_with = "lenient")]
    pub notifications: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub sound_enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub language: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            warn!("Ignoring stored preference {}: {}", value, e);
            Ok(None)
        }
    }
}

impl PreferencesUpdate {
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn notifications(mut self, enabled: bool) -> Self {
        self.notifications = Some(enabled);
        self
    }

    pub fn sound_enabled(mut self, enabled: bool) -> Self {
        self.sound_enabled = Some(enabled);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.notifications.is_none()
            && self.sound_enabled.is_none()
            && self.language.is_none()
    }
}

impl From<Preferences> for PreferencesUpdate {
    fn from(preferences: Preferences) -> Self {
        Self {
            theme: Some(preferences.theme),
            notifications: Some(preferences.notifications),
            sound_enabled: Some(preferences.sound_enabled),
            language: Some(preferences.language),
        }
    }
}
