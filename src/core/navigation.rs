//! Navigation history - Bounded log of visited routes

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of retained history entries
pub const HISTORY_LIMIT: usize = 10;

/// Route shown when the shell starts
pub const DEFAULT_TAB: &str = "/dashboard-home";

/// A single visited route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Route path
    pub path: String,
    /// When the route became active
    pub timestamp: DateTime<Utc>,
}

impl NavigationEntry {
    pub fn new(path: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            path: path.into(),
            timestamp,
        }
    }
}

/// Visited routes, oldest first, never longer than [`HISTORY_LIMIT`].
///
/// Stored as a plain array. Reading an array longer than the limit keeps only
/// its last [`HISTORY_LIMIT`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<NavigationEntry>", into = "Vec<NavigationEntry>")]
pub struct NavigationHistory {
    entries: VecDeque<NavigationEntry>,
}

impl From<Vec<NavigationEntry>> for NavigationHistory {
    fn from(entries: Vec<NavigationEntry>) -> Self {
        let mut history = Self::new();
        for entry in entries {
            history.push(entry);
        }
        history
    }
}

impl From<NavigationHistory> for Vec<NavigationEntry> {
    fn from(history: NavigationHistory) -> Self {
        history.entries.into()
    }
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting from the front once the limit is reached
    pub fn push(&mut self, entry: NavigationEntry) {
        while self.entries.len() >= HISTORY_LIMIT {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&NavigationEntry> {
        self.entries.back()
    }

    /// Entries from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &NavigationEntry> + '_ {
        self.entries.iter()
    }

    /// Paths from oldest to newest
    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.path.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_at_end() {
        let mut history = NavigationHistory::new();
        let now = Utc::now();
        history.push(NavigationEntry::new("/a", now));
        history.push(NavigationEntry::new("/b", now));
        assert_eq!(history.paths(), vec!["/a", "/b"]);
        assert_eq!(history.latest().map(|e| e.path.as_str()), Some("/b"));
    }

    #[test]
    fn keeps_the_ten_most_recent() {
        let mut history = NavigationHistory::new();
        let now = Utc::now();
        for i in 0..25 {
            history.push(NavigationEntry::new(format!("/page-{}", i), now));
            assert!(history.len() <= HISTORY_LIMIT);
        }

        let expected: Vec<String> = (15..25).map(|i| format!("/page-{}", i)).collect();
        let actual: Vec<String> = history.iter().map(|e| e.path.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut history = NavigationHistory::new();
        let at = DateTime::parse_from_rfc3339("2024-03-01T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        history.push(NavigationEntry::new("/progress-analytics", at));

        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json[0]["path"], "/progress-analytics");
        assert_eq!(json[0]["timestamp"], "2024-03-01T09:30:00Z");
    }

    #[test]
    fn oversized_array_keeps_the_most_recent() {
        let now = Utc::now();
        let entries: Vec<NavigationEntry> = (0..20)
            .map(|i| NavigationEntry::new(format!("/page-{}", i), now))
            .collect();
        let json = serde_json::to_string(&entries).unwrap();

        let history: NavigationHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.iter().next().map(|e| e.path.as_str()), Some("/page-10"));
        assert_eq!(history.latest().map(|e| e.path.as_str()), Some("/page-19"));
    }

    #[test]
    fn reads_browser_style_timestamps() {
        let json = r#"[{"path":"/dashboard-home","timestamp":"2024-03-01T09:30:00.123Z"}]"#;
        let history: NavigationHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.paths(), vec!["/dashboard-home"]);
    }
}
