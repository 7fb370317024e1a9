//! Poimea project state as stored in `poimea-project.json`.
//!
//! The file is edited by hand between runs; the generators only read it.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ChapterStatus;

/// Complete project state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectState {
    /// Title, author and start date
    pub project: ProjectInfo,

    /// Per-book writing phases
    pub phases: Phases,

    /// Animation storyboard progress
    pub storyboard: Storyboard,

    /// Hard deadlines
    pub deadlines: Deadlines,

    /// Named checkpoints
    #[serde(default)]
    pub milestones: Vec<Milestone>,

    /// Chapter plan of book 1, in reading order
    #[serde(default)]
    pub chapters: Vec<Chapter>,

    /// Scheduling preferences
    #[serde(default)]
    pub daily_goals: DailyGoals,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectInfo {
    pub title: String,
    pub author: String,
    /// First day of the project; week numbers count from here
    pub created_date: Date,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phases {
    pub book1: BookPhase,
}

/// Word-count targets and actuals for one manuscript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookPhase {
    pub target_word_count: i64,
    pub current_word_count: i64,
    #[serde(default)]
    pub chapters_completed: i64,
    #[serde(default)]
    pub chapters_planned: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Storyboard {
    pub total_scenes: i64,
    pub scenes_completed: i64,
    #[serde(default)]
    pub target_runtime_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deadlines {
    pub storyboard_complete: Date,
    pub book1_rough_draft: Date,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    pub name: String,
    pub target_date: Date,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    #[serde(default)]
    pub current_words: i64,
    #[serde(default)]
    pub target_words: i64,
    #[serde(default)]
    pub status: ChapterStatus,
}

impl Chapter {
    /// Percentage of the chapter target written so far, `0.0` when the
    /// chapter has no target.
    pub fn progress_percent(&self) -> f64 {
        percent(self.current_words, self.target_words)
    }
}

/// Scheduling preferences for the daily task list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyGoals {
    /// English weekday names (`"Sunday"`) on which no writing is scheduled
    #[serde(default = "default_rest_days")]
    pub rest_days: Vec<String>,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            rest_days: default_rest_days(),
        }
    }
}

impl DailyGoals {
    /// Whether `day_name` is one of the configured rest days.
    pub fn is_rest_day(&self, day_name: &str) -> bool {
        self.rest_days
            .iter()
            .any(|rest| rest.eq_ignore_ascii_case(day_name))
    }
}

fn default_rest_days() -> Vec<String> {
    vec!["Sunday".to_string()]
}

/// `part / whole * 100`, or `0.0` for an empty whole.
pub(crate) fn percent(part: i64, whole: i64) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64 * 100.0
    } else {
        0.0
    }
}
