//! Notification inbox - Ordered notifications with an unread counter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub u64);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type tag of a notification. Unrecognised tags are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    Interview,
    Achievement,
    System,
    Other(String),
}

impl NotificationKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Interview => "interview",
            Self::Achievement => "achievement",
            Self::System => "system",
            Self::Other(tag) => tag,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Interview => "Interview",
            Self::Achievement => "Achievement",
            Self::System => "System",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for NotificationKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "interview" => Self::Interview,
            "achievement" => Self::Achievement,
            "system" => Self::System,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for NotificationKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<NotificationKind> for String {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// A single notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier
    pub id: NotificationId,
    /// Type tag
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Short headline
    pub title: String,
    /// Body text
    pub message: String,
    /// When the notification was raised
    pub timestamp: DateTime<Utc>,
    /// Whether the user has seen it
    pub read: bool,
}

impl Notification {
    pub fn new(
        id: NotificationId,
        kind: impl Into<NotificationKind>,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            title: title.into(),
            message: message.into(),
            timestamp,
            read: false,
        }
    }
}

/// Notifications, most recent first, with an incrementally maintained unread count.
///
/// Every mutator adjusts `count` itself; it is never recomputed from `items`.
/// A stored `count` is ignored when reading and recounted from the items.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "StoredInbox")]
pub struct NotificationInbox {
    count: usize,
    items: Vec<Notification>,
}

#[derive(Deserialize)]
struct StoredInbox {
    #[serde(default)]
    items: Vec<Notification>,
}

impl From<StoredInbox> for NotificationInbox {
    fn from(stored: StoredInbox) -> Self {
        Self::from_items(stored.items)
    }
}

impl NotificationInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inbox from existing items, counting the unread ones
    pub fn from_items(items: Vec<Notification>) -> Self {
        let count = items.iter().filter(|n| !n.read).count();
        Self { count, items }
    }

    /// Unread count
    pub fn count(&self) -> usize {
        self.count
    }

    /// Items, most recent first
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread(&self) -> impl Iterator<Item = &Notification> + '_ {
        self.items.iter().filter(|n| !n.read)
    }

    /// Largest id in the inbox
    pub fn max_id(&self) -> Option<NotificationId> {
        self.items.iter().map(|n| n.id).max()
    }

    /// Prepend a notification. It is always stored unread.
    pub fn push_front(&mut self, mut notification: Notification) {
        notification.read = false;
        self.items.insert(0, notification);
        self.count += 1;
    }

    /// Mark the item(s) with `id` as read.
    ///
    /// Only items that flip from unread to read are subtracted from the
    /// count. Returns the number of items flipped.
    pub fn mark_read(&mut self, id: NotificationId) -> usize {
        let mut flipped = 0;
        for item in self.items.iter_mut().filter(|n| n.id == id && !n.read) {
            item.read = true;
            flipped += 1;
        }
        self.count = self.count.saturating_sub(flipped);
        flipped
    }

    /// Mark every item as read
    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
        self.count = 0;
    }
}
