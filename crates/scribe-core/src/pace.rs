//! Deadline and pace arithmetic for the Poimea project.
//!
//! Everything here is a pure function of `today` and the project state, so
//! callers pass the date in rather than reading the clock.

use jiff::civil::Date;

use crate::models::{Chapter, ChapterStatus, Milestone, ProjectState};

/// Length of the whole project, in calendar days.
pub const PROJECT_HORIZON_DAYS: i64 = 121;

/// Length of the storyboard phase, in calendar days.
pub const STORYBOARD_HORIZON_DAYS: i64 = 96;

/// Milestones closer than this many days are flagged as urgent.
pub const URGENT_WITHIN_DAYS: i64 = 7;

/// Signed number of calendar days from `today` until `target`.
///
/// Negative when the target is already past.
pub fn days_until(today: Date, target: Date) -> i64 {
    i64::from((target - today).get_days())
}

/// Working days available in `days` calendar days, with one rest day in
/// every seven: `floor(days * 6 / 7)`.
pub fn working_days(days: i64) -> i64 {
    (days * 6).div_euclid(7)
}

/// Daily targets derived from the remaining work and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Targets {
    /// Words to write per working day, truncated
    pub daily_words: i64,
    /// Scenes to storyboard per working day, rounded to two decimals
    pub daily_scenes: f64,
    pub days_to_storyboard: i64,
    pub days_to_draft: i64,
    pub working_days_storyboard: i64,
    pub working_days_draft: i64,
    pub words_remaining: i64,
    pub scenes_remaining: i64,
}

impl Targets {
    /// Calendar days of the project horizon already used up.
    pub fn days_elapsed(&self) -> i64 {
        PROJECT_HORIZON_DAYS - self.days_to_draft
    }
}

/// Computes the daily pace needed to meet both deadlines.
///
/// The working-day divisor is floored at one so an overdue deadline asks for
/// all remaining work in a single day instead of dividing by zero.
pub fn calculate_targets(project: &ProjectState, today: Date) -> Targets {
    let days_to_storyboard = days_until(today, project.deadlines.storyboard_complete);
    let days_to_draft = days_until(today, project.deadlines.book1_rough_draft);

    let working_days_storyboard = working_days(days_to_storyboard);
    let working_days_draft = working_days(days_to_draft);

    let book1 = &project.phases.book1;
    let storyboard = &project.storyboard;

    let words_remaining = book1.target_word_count - book1.current_word_count;
    let scenes_remaining = storyboard.total_scenes - storyboard.scenes_completed;

    let daily_words = words_remaining / working_days_draft.max(1);
    let daily_scenes = round2(scenes_remaining as f64 / working_days_storyboard.max(1) as f64);

    Targets {
        daily_words,
        daily_scenes,
        days_to_storyboard,
        days_to_draft,
        working_days_storyboard,
        working_days_draft,
        words_remaining,
        scenes_remaining,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Position of `today` within the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekProgress {
    /// 1-based week counted from the project's creation date
    pub week_number: i64,
    /// Share of the 121-day horizon already elapsed, truncated
    pub percent_complete: i64,
}

/// Computes the current project week and overall percent complete.
pub fn week_progress(project: &ProjectState, today: Date) -> WeekProgress {
    let days_elapsed = days_until(project.project.created_date, today);
    let week_number = days_elapsed.div_euclid(7) + 1;

    let days_to_final = days_until(today, project.deadlines.book1_rough_draft);
    let horizon = PROJECT_HORIZON_DAYS as f64;
    let percent_complete = ((horizon - days_to_final as f64) / horizon * 100.0) as i64;

    WeekProgress {
        week_number,
        percent_complete,
    }
}

/// An incomplete milestone with its distance from today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingMilestone<'a> {
    pub milestone: &'a Milestone,
    pub days_until: i64,
}

impl UpcomingMilestone<'_> {
    pub fn is_urgent(&self) -> bool {
        self.days_until < URGENT_WITHIN_DAYS
    }
}

/// The `limit` nearest incomplete milestones, soonest first.
pub fn upcoming_milestones(
    project: &ProjectState,
    today: Date,
    limit: usize,
) -> Vec<UpcomingMilestone<'_>> {
    let mut upcoming: Vec<UpcomingMilestone<'_>> = project
        .milestones
        .iter()
        .filter(|milestone| !milestone.completed)
        .map(|milestone| UpcomingMilestone {
            milestone,
            days_until: days_until(today, milestone.target_date),
        })
        .collect();
    upcoming.sort_by_key(|m| m.days_until);
    upcoming.truncate(limit);
    upcoming
}

/// Incomplete milestones due within [`URGENT_WITHIN_DAYS`], in file order.
pub fn urgent_milestones(project: &ProjectState, today: Date) -> Vec<UpcomingMilestone<'_>> {
    project
        .milestones
        .iter()
        .filter(|milestone| !milestone.completed)
        .map(|milestone| UpcomingMilestone {
            milestone,
            days_until: days_until(today, milestone.target_date),
        })
        .filter(UpcomingMilestone::is_urgent)
        .collect()
}

/// The first chapter not yet completed; the first chapter when all are done.
pub fn current_chapter(project: &ProjectState) -> Option<&Chapter> {
    project
        .chapters
        .iter()
        .find(|chapter| chapter.status != ChapterStatus::Completed)
        .or_else(|| project.chapters.first())
}

/// Whether a track is keeping up with its linear schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceStatus {
    OnTrack,
    Behind,
}

impl PaceStatus {
    fn from_difference(difference: i64) -> Self {
        if difference >= 0 {
            PaceStatus::OnTrack
        } else {
            PaceStatus::Behind
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaceStatus::OnTrack => "✅ On track",
            PaceStatus::Behind => "⚠️ Behind schedule",
        }
    }
}

/// Actual versus expected progress of one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackPace {
    pub expected: i64,
    pub actual: i64,
}

impl TrackPace {
    /// `actual - expected`; negative when behind.
    pub fn difference(&self) -> i64 {
        self.actual - self.expected
    }

    pub fn status(&self) -> PaceStatus {
        PaceStatus::from_difference(self.difference())
    }
}

/// Expected-by-now progress from linear interpolation over the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaceAssessment {
    pub words: TrackPace,
    pub scenes: TrackPace,
}

/// Compares actual progress with a linear schedule.
///
/// Words are expected to accrue evenly over the 121-day project; scenes over
/// the 96-day storyboard phase, capped once that phase is over.
pub fn assess_pace(project: &ProjectState, targets: &Targets) -> PaceAssessment {
    let elapsed = targets.days_elapsed();
    let book1 = &project.phases.book1;
    let storyboard = &project.storyboard;

    let expected_words =
        (book1.target_word_count as f64 / PROJECT_HORIZON_DAYS as f64 * elapsed as f64) as i64;
    let expected_scenes = (storyboard.total_scenes as f64 / STORYBOARD_HORIZON_DAYS as f64
        * elapsed.min(STORYBOARD_HORIZON_DAYS) as f64) as i64;

    PaceAssessment {
        words: TrackPace {
            expected: expected_words,
            actual: book1.current_word_count,
        },
        scenes: TrackPace {
            expected: expected_scenes,
            actual: storyboard.scenes_completed,
        },
    }
}
