//! Poimea daily task list.

use std::fmt;

use jiff::{civil::Date, Timestamp};
use rand::Rng;

use super::{
    datetime::{weekday_name, GeneratedAt, IsoDate, LongDate},
    inspiration::{choose_tips, TIPS_PER_DAY},
    numbers::Thousands,
};
use crate::{
    models::ProjectState,
    pace::{
        current_chapter, upcoming_milestones, week_progress, Targets, PROJECT_HORIZON_DAYS,
    },
};

const UPCOMING_MILESTONE_LIMIT: usize = 3;

const REST_DAY_TASKS: &[&str] = &[
    "Review this week's writing",
    "Brainstorm ideas for upcoming chapters",
    "Character development notes",
    "World-building sketches",
    "Read for inspiration",
    "Mind mapping for story arcs",
];

const WRITING_PROMPTS: &[&str] = &[
    "What is the main conflict in this scene?",
    "How does this chapter advance the plot?",
    "What emotions should the reader feel?",
    "Are character motivations clear?",
];

const STORYBOARD_TASKS: &[&str] = &[
    "Sketch scene layouts",
    "Define camera angles",
    "Note key character positions",
    "Add dialogue/action notes",
    "Mark scene transitions",
    "Update scene count in poimea-project.json",
];

const STORYBOARD_FOCUS: &[&str] = &[
    "Composition and framing",
    "Character expressions and body language",
    "Environmental details",
    "Pacing and flow",
    "Visual storytelling",
];

const PROGRESS_TRACKING: &str = r#"### Update Your Progress:

```bash
# After your writing session, update the project file
# Edit poimea-project.json and update:
# - phases.book1.current_word_count
# - storyboard.scenes_completed
# - chapters[].current_words
# - chapters[].status

# Then regenerate tasks
poimea-tasks
```

### Quick Log Entry:
- **Words written today:** _____
- **Scenes completed:** _____
- **Time spent:** _____ hours
- **Notes/Reflections:**
  -
  -
"#;

/// The task list for a single day.
///
/// On a configured rest day only light optional tasks are listed; on a
/// working day the writing and storyboard goals, upcoming milestones and a
/// few randomly chosen tips are included.
pub struct DailyTasks<'a> {
    project: &'a ProjectState,
    targets: &'a Targets,
    today: Date,
    generated_at: &'a Timestamp,
    tips: Vec<&'static str>,
}

impl<'a> DailyTasks<'a> {
    pub fn new<R: Rng + ?Sized>(
        project: &'a ProjectState,
        targets: &'a Targets,
        today: Date,
        generated_at: &'a Timestamp,
        rng: &mut R,
    ) -> Self {
        Self {
            project,
            targets,
            today,
            generated_at,
            tips: choose_tips(rng, TIPS_PER_DAY),
        }
    }

    pub fn is_rest_day(&self) -> bool {
        self.project
            .daily_goals
            .is_rest_day(&weekday_name(self.today))
    }

    fn fmt_overview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book1 = &self.project.phases.book1;
        let storyboard = &self.project.storyboard;
        let deadlines = &self.project.deadlines;
        let progress = week_progress(self.project, self.today);

        writeln!(f, "## 🎯 Project Overview")?;
        writeln!(f)?;
        writeln!(
            f,
            "**Week {}** | Overall Progress: **{}%**",
            progress.week_number, progress.percent_complete
        )?;
        writeln!(f)?;
        writeln!(f, "| Metric | Current | Target | Remaining |")?;
        writeln!(f, "|--------|---------|--------|-----------|")?;
        writeln!(
            f,
            "| **Book 1 Words** | {} | {} | {} |",
            Thousands(book1.current_word_count),
            Thousands(book1.target_word_count),
            Thousands(self.targets.words_remaining)
        )?;
        writeln!(
            f,
            "| **Chapters** | {} / {} | {} | {} |",
            book1.chapters_completed,
            book1.chapters_planned,
            book1.chapters_planned,
            book1.chapters_planned - book1.chapters_completed
        )?;
        writeln!(
            f,
            "| **Storyboard Scenes** | {} / {} | {} | {} |",
            storyboard.scenes_completed,
            storyboard.total_scenes,
            storyboard.total_scenes,
            self.targets.scenes_remaining
        )?;
        writeln!(f)?;
        writeln!(f, "## ⏰ Countdown")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **🎬 Storyboard Due:** {} days ({})",
            self.targets.days_to_storyboard,
            IsoDate(deadlines.storyboard_complete)
        )?;
        writeln!(
            f,
            "- **📝 Rough Draft Due:** {} days ({})",
            self.targets.days_to_draft,
            IsoDate(deadlines.book1_rough_draft)
        )?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)
    }

    fn fmt_rest_day(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 🌟 Rest Day")?;
        writeln!(f)?;
        writeln!(
            f,
            "Today is {} - your designated rest day!",
            weekday_name(self.today)
        )?;
        writeln!(f)?;
        writeln!(f, "### Optional Light Tasks:")?;
        for task in REST_DAY_TASKS {
            writeln!(f, "- [ ] {task}")?;
        }
        writeln!(f)?;
        writeln!(f, "**Remember:** Rest is essential for creativity! 🧘")?;
        writeln!(f)
    }

    fn fmt_writing_goals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let daily_words = self.targets.daily_words;

        writeln!(f, "## ✍️ Today's Writing Goals")?;
        writeln!(f)?;
        writeln!(f, "### Primary Task: Write {daily_words} words")?;
        writeln!(f)?;

        if let Some(chapter) = current_chapter(self.project) {
            writeln!(f, "**Current Chapter:** {}", chapter.title)?;
            writeln!(
                f,
                "- Progress: {} / {} words ({:.1}%)",
                chapter.current_words,
                chapter.target_words,
                chapter.progress_percent()
            )?;
            writeln!(f, "- Status: {}", chapter.status.label())?;
            writeln!(f)?;
        }

        writeln!(f, "### Writing Tasks:")?;
        writeln!(
            f,
            "- [ ] Morning writing session ({} words)",
            daily_words.div_euclid(2)
        )?;
        writeln!(
            f,
            "- [ ] Afternoon/Evening session ({} words)",
            daily_words.div_euclid(2)
        )?;
        writeln!(f, "- [ ] Review and edit today's work")?;
        writeln!(f, "- [ ] Update word count in poimea-project.json")?;
        writeln!(f)?;
        writeln!(f, "### Writing Prompts:")?;
        for prompt in WRITING_PROMPTS {
            writeln!(f, "- {prompt}")?;
        }
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)
    }

    fn fmt_storyboard(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 🎬 Storyboard Tasks")?;
        writeln!(f)?;
        writeln!(
            f,
            "### Daily Goal: {:.2} scenes",
            self.targets.daily_scenes
        )?;
        writeln!(f)?;
        for task in STORYBOARD_TASKS {
            writeln!(f, "- [ ] {task}")?;
        }
        writeln!(f)?;
        writeln!(f, "### Storyboard Focus:")?;
        for focus in STORYBOARD_FOCUS {
            writeln!(f, "- {focus}")?;
        }
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)
    }

    fn fmt_milestones(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 🎯 Upcoming Milestones")?;
        writeln!(f)?;
        for upcoming in upcoming_milestones(self.project, self.today, UPCOMING_MILESTONE_LIMIT) {
            let (icon, urgency) = if upcoming.is_urgent() {
                ("⏰", "**URGENT**")
            } else {
                ("📅", "")
            };
            writeln!(
                f,
                "{icon} **{}** - {} days {urgency}",
                upcoming.milestone.name, upcoming.days_until
            )?;
        }
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)
    }

    fn fmt_working_day(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_writing_goals(f)?;
        self.fmt_storyboard(f)?;
        self.fmt_milestones(f)?;

        writeln!(f, "## 📊 Progress Tracking")?;
        writeln!(f)?;
        writeln!(f, "{PROGRESS_TRACKING}")?;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "## 💡 Productivity Tips")?;
        writeln!(f)?;
        for tip in &self.tips {
            writeln!(f, "- {tip}")?;
        }
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "## 🎨 Creative Inspiration")?;
        writeln!(f)?;
        writeln!(
            f,
            "**Remember:** You're building a world, creating characters, telling a story that only you can tell."
        )?;
        writeln!(
            f,
            "Every word written is progress. Every scene sketched is one step closer to bringing Poimea to life."
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "**Today's Mantra:** \"I am a storyteller, and today I add to my story.\""
        )?;
        writeln!(f)
    }

    fn fmt_dashboard(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let targets = self.targets;

        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "## 📈 Statistics Dashboard")?;
        writeln!(f)?;
        writeln!(f, "- **Total Project Days:** {PROJECT_HORIZON_DAYS}")?;
        writeln!(f, "- **Days Elapsed:** {}", targets.days_elapsed())?;
        writeln!(f, "- **Days Remaining:** {}", targets.days_to_draft)?;
        writeln!(
            f,
            "- **Working Days Left (Draft):** {}",
            targets.working_days_draft
        )?;
        writeln!(
            f,
            "- **Working Days Left (Storyboard):** {}",
            targets.working_days_storyboard
        )?;
        writeln!(
            f,
            "- **Average Daily Pace Needed:** {} words + {:.2} scenes",
            targets.daily_words, targets.daily_scenes
        )?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "*Generated: {}*", GeneratedAt(self.generated_at))?;
        writeln!(f, "*Next update: Tomorrow at 9:00 AM UTC*")
    }
}

impl fmt::Display for DailyTasks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# 📖 Poimea Daily Task - {} ({})",
            LongDate(self.today),
            weekday_name(self.today)
        )?;
        writeln!(f)?;
        self.fmt_overview(f)?;

        if self.is_rest_day() {
            self.fmt_rest_day(f)?;
        } else {
            self.fmt_working_day(f)?;
        }

        self.fmt_dashboard(f)
    }
}
