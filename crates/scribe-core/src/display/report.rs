//! Poimea progress report.

use std::fmt;

use jiff::civil::Date;
use rand::Rng;

use super::{
    datetime::{IsoDate, LongDate},
    inspiration::choose_quote,
    numbers::{SignedThousands, Thousands},
};
use crate::{
    models::{project::percent, ProjectState},
    pace::{assess_pace, days_until, urgent_milestones, week_progress, PaceAssessment, Targets},
};

/// Word deficit beyond which the writing recommendation becomes critical.
const CRITICAL_WORD_DEFICIT: i64 = -5000;

/// Scene deficit beyond which the storyboard recommendation becomes critical.
const CRITICAL_SCENE_DEFICIT: i64 = -10;

/// Comprehensive progress report: statistics, milestones, pace assessment
/// and recommendations.
pub struct ProgressReport<'a> {
    project: &'a ProjectState,
    targets: &'a Targets,
    today: Date,
    quote: &'static str,
}

impl<'a> ProgressReport<'a> {
    pub fn new<R: Rng + ?Sized>(
        project: &'a ProjectState,
        targets: &'a Targets,
        today: Date,
        rng: &mut R,
    ) -> Self {
        Self {
            project,
            targets,
            today,
            quote: choose_quote(rng),
        }
    }

    /// Recommendation lines derived from the pace assessment and urgent
    /// milestones.
    pub fn recommendations(&self, pace: &PaceAssessment) -> Vec<String> {
        let mut recommendations = Vec::new();

        let words_diff = pace.words.difference();
        recommendations.push(
            if words_diff < CRITICAL_WORD_DEFICIT {
                "🚨 **Critical:** Significantly behind on word count. Consider extended writing sessions this week."
            } else if words_diff < 0 {
                "⚠️ Slightly behind on word count. Add 200-300 words daily to catch up."
            } else {
                "✅ Writing pace is good! Maintain current momentum."
            }
            .to_string(),
        );

        let scenes_diff = pace.scenes.difference();
        recommendations.push(
            if scenes_diff < CRITICAL_SCENE_DEFICIT {
                "🚨 **Critical:** Storyboard is falling behind. Dedicate focused time to scene planning."
            } else if scenes_diff < 0 {
                "⚠️ Storyboard needs attention. Try to complete 1-2 extra scenes this week."
            } else {
                "✅ Storyboard pace is solid! Keep up the great work."
            }
            .to_string(),
        );

        for urgent in urgent_milestones(self.project, self.today) {
            recommendations.push(format!(
                "🎯 **Urgent:** {} due in {} days!",
                urgent.milestone.name, urgent.days_until
            ));
        }

        recommendations
    }

    fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = week_progress(self.project, self.today);

        writeln!(f, "# 📊 Poimea Project Progress Report")?;
        writeln!(f)?;
        writeln!(f, "*Generated: {}*", LongDate(self.today))?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "## 🎯 Executive Summary")?;
        writeln!(f)?;
        writeln!(f, "**Project:** {}", self.project.project.title)?;
        writeln!(f, "**Author:** {}", self.project.project.author)?;
        writeln!(f, "**Overall Progress:** {}%", progress.percent_complete)?;
        writeln!(f, "**Project Week:** {}", progress.week_number)?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)
    }

    fn fmt_book(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book1 = &self.project.phases.book1;

        writeln!(f, "## 📖 Book 1 Progress")?;
        writeln!(f)?;
        writeln!(f, "### Writing Statistics")?;
        writeln!(f)?;
        writeln!(f, "| Metric | Value |")?;
        writeln!(f, "|--------|-------|")?;
        writeln!(
            f,
            "| **Total Word Count** | {} / {} |",
            Thousands(book1.current_word_count),
            Thousands(book1.target_word_count)
        )?;
        writeln!(
            f,
            "| **Completion** | {:.1}% |",
            percent(book1.current_word_count, book1.target_word_count)
        )?;
        writeln!(
            f,
            "| **Chapters Completed** | {} / {} |",
            book1.chapters_completed, book1.chapters_planned
        )?;
        writeln!(
            f,
            "| **Words Remaining** | {} |",
            Thousands(self.targets.words_remaining)
        )?;
        writeln!(
            f,
            "| **Days to Deadline** | {} days |",
            self.targets.days_to_draft
        )?;
        writeln!(
            f,
            "| **Required Daily Pace** | {} words/day |",
            self.targets.daily_words
        )?;
        writeln!(f)?;
        writeln!(f, "### Chapter Breakdown")?;
        writeln!(f)?;

        for chapter in &self.project.chapters {
            writeln!(f, "**{} {}**", chapter.status.icon(), chapter.title)?;
            writeln!(
                f,
                "- Words: {} / {} ({:.1}%)",
                chapter.current_words,
                chapter.target_words,
                chapter.progress_percent()
            )?;
            writeln!(f, "- Status: {}", chapter.status.label())?;
            writeln!(f)?;
        }

        writeln!(f, "---")?;
        writeln!(f)
    }

    fn fmt_storyboard(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let storyboard = &self.project.storyboard;

        writeln!(f, "## 🎬 Storyboard Progress")?;
        writeln!(f)?;
        writeln!(f, "| Metric | Value |")?;
        writeln!(f, "|--------|-------|")?;
        writeln!(
            f,
            "| **Scenes Completed** | {} / {} |",
            storyboard.scenes_completed, storyboard.total_scenes
        )?;
        writeln!(
            f,
            "| **Completion** | {:.1}% |",
            percent(storyboard.scenes_completed, storyboard.total_scenes)
        )?;
        writeln!(
            f,
            "| **Scenes Remaining** | {} |",
            self.targets.scenes_remaining
        )?;
        writeln!(
            f,
            "| **Days to Deadline** | {} days |",
            self.targets.days_to_storyboard
        )?;
        writeln!(
            f,
            "| **Required Daily Pace** | {:.2} scenes/day |",
            self.targets.daily_scenes
        )?;
        writeln!(
            f,
            "| **Target Runtime** | {} minutes |",
            storyboard.target_runtime_minutes
        )?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)
    }

    fn fmt_milestones(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 🎯 Milestones Status")?;
        writeln!(f)?;
        for milestone in &self.project.milestones {
            let target = IsoDate(milestone.target_date);
            if milestone.completed {
                writeln!(f, "- **{}** ({target}): ✅ Completed", milestone.name)?;
            } else {
                writeln!(
                    f,
                    "- **{}** ({target}): ⏳ {} days remaining",
                    milestone.name,
                    days_until(self.today, milestone.target_date)
                )?;
            }
        }
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)
    }

    fn fmt_timeline(&self, f: &mut fmt::Formatter<'_>, pace: &PaceAssessment) -> fmt::Result {
        let targets = self.targets;

        writeln!(f, "## 📅 Timeline Analysis")?;
        writeln!(f)?;
        writeln!(f, "### Critical Path")?;
        writeln!(f)?;
        writeln!(
            f,
            "1. **Storyboard Completion** - {} days",
            targets.days_to_storyboard
        )?;
        writeln!(
            f,
            "   - Requires {:.2} scenes/day",
            targets.daily_scenes
        )?;
        writeln!(
            f,
            "   - Working days available: {}",
            targets.working_days_storyboard
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "2. **Book 1 Rough Draft** - {} days",
            targets.days_to_draft
        )?;
        writeln!(f, "   - Requires {} words/day", targets.daily_words)?;
        writeln!(
            f,
            "   - Working days available: {}",
            targets.working_days_draft
        )?;
        writeln!(f)?;
        writeln!(f, "### Pace Assessment")?;
        writeln!(f)?;
        writeln!(f, "**Writing Pace:** {}", pace.words.status().label())?;
        writeln!(
            f,
            "- Expected words by now: {}",
            Thousands(pace.words.expected)
        )?;
        writeln!(f, "- Actual words: {}", Thousands(pace.words.actual))?;
        writeln!(
            f,
            "- Difference: {}",
            SignedThousands(pace.words.difference())
        )?;
        writeln!(f)?;
        writeln!(f, "**Storyboard Pace:** {}", pace.scenes.status().label())?;
        writeln!(f, "- Expected scenes by now: {}", pace.scenes.expected)?;
        writeln!(f, "- Actual scenes: {}", pace.scenes.actual)?;
        writeln!(f, "- Difference: {:+}", pace.scenes.difference())?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)
    }
}

impl fmt::Display for ProgressReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pace = assess_pace(self.project, self.targets);

        self.fmt_summary(f)?;
        self.fmt_book(f)?;
        self.fmt_storyboard(f)?;
        self.fmt_milestones(f)?;
        self.fmt_timeline(f, &pace)?;

        writeln!(f, "## 💪 Recommendations")?;
        writeln!(f)?;
        for recommendation in self.recommendations(&pace) {
            writeln!(f, "{recommendation}")?;
            writeln!(f)?;
        }

        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "## 🌟 Motivation")?;
        writeln!(f)?;
        writeln!(f, "{}", self.quote)?;
        writeln!(f)?;
        writeln!(
            f,
            "**You've got this! Keep writing, keep creating, keep bringing Poimea to life!** 🚀"
        )?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(
            f,
            "*This report is automatically generated daily. For daily tasks, see POIMEA_DAILY_TASK.md*"
        )
    }
}
