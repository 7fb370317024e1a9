//! Status enumeration for manuscript chapters.

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of chapter statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChapterStatus {
    /// No words written yet
    #[default]
    NotStarted,

    /// Chapter is being drafted
    InProgress,

    /// Chapter draft is finished
    Completed,
}

impl ChapterStatus {
    /// Human-readable label, e.g. `In Progress`.
    pub fn label(&self) -> &'static str {
        match self {
            ChapterStatus::NotStarted => "Not Started",
            ChapterStatus::InProgress => "In Progress",
            ChapterStatus::Completed => "Completed",
        }
    }

    /// Get the icon used in the chapter breakdown of the progress report.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scribe_core::models::ChapterStatus;
    ///
    /// assert_eq!(ChapterStatus::Completed.icon(), "✅");
    /// assert_eq!(ChapterStatus::InProgress.icon(), "🔄");
    /// assert_eq!(ChapterStatus::NotStarted.icon(), "⭕");
    /// ```
    pub fn icon(&self) -> &'static str {
        match self {
            ChapterStatus::Completed => "✅",
            ChapterStatus::InProgress => "🔄",
            ChapterStatus::NotStarted => "⭕",
        }
    }
}
