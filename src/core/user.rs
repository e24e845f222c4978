//! User identity and interview progress

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interview practice progress tracked for the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    /// Mock interviews completed
    pub completed_interviews: u32,
    /// Mock interviews scheduled in total
    pub total_interviews: u32,
    /// Interviews the user aims to complete per week
    pub weekly_goal: u32,
    /// Unlocked achievement labels
    pub achievements: BTreeSet<String>,
}

impl UserProgress {
    /// Shallow-merge a partial update; fields left as `None` are untouched.
    ///
    /// `achievements` is replaced wholesale when present, like every other field.
    pub fn merge(mut self, update: ProgressUpdate) -> Self {
        if let Some(completed) = update.completed_interviews {
            self.completed_interviews = completed;
        }
        if let Some(total) = update.total_interviews {
            self.total_interviews = total;
        }
        if let Some(goal) = update.weekly_goal {
            self.weekly_goal = goal;
        }
        if let Some(achievements) = update.achievements {
            self.achievements = achievements;
        }
        self
    }

    /// Completion percentage clamped to `0..=100`
    pub fn completion_percent(&self) -> u8 {
        if self.total_interviews == 0 {
            return 0;
        }
        let percent = u64::from(self.completed_interviews) * 100 / u64::from(self.total_interviews);
        percent.min(100) as u8
    }

    /// Whether the weekly goal has been reached
    pub fn weekly_goal_met(&self) -> bool {
        self.weekly_goal > 0 && self.completed_interviews >= self.weekly_goal
    }
}

/// Partial progress payload for `UpdateUserProgress`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressUpdate {
    pub completed_interviews: Option<u32>,
    pub total_interviews: Option<u32>,
    pub weekly_goal: Option<u32>,
    pub achievements: Option<BTreeSet<String>>,
}

impl ProgressUpdate {
    pub fn completed(mut self, completed: u32) -> Self {
        self.completed_interviews = Some(completed);
        self
    }

    pub fn total(mut self, total: u32) -> Self {
        self.total_interviews = Some(total);
        self
    }

    pub fn weekly_goal(mut self, goal: u32) -> Self {
        self.weekly_goal = Some(goal);
        self
    }

    pub fn achievements<I, T>(mut self, achievements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.achievements = Some(achievements.into_iter().map(Into::into).collect());
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.completed_interviews.is_none()
            && self.total_interviews.is_none()
            && self.weekly_goal.is_none()
            && self.achievements.is_none()
    }
}

/// The one user known to the shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Avatar image URI
    pub avatar: String,
    /// Set by login, cleared by logout
    pub is_authenticated: bool,
    /// Practice progress
    pub progress: UserProgress,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            avatar: String::new(),
            is_authenticated: false,
            progress: UserProgress::default(),
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn with_progress(mut self, progress: UserProgress) -> Self {
        self.progress = progress;
        self
    }

    /// First letter of the name, used when no avatar is available
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}
