//! Generator runs: load, render, write, then report what was produced.

use std::path::Path;

use anyhow::{Context, Result};
use jiff::{civil::Date, tz::TimeZone, Timestamp};
use log::{info, warn};
use scribe_core::{
    calculate_targets, load_books, load_project, render_book_summary, write_document,
    writer::{BOOK_SUMMARY_FILE, BOOK_TASK_FILE, POIMEA_REPORT_FILE, POIMEA_TASK_FILE},
    BookChecklist, DailyTasks, ProgressReport,
};

use crate::{
    args::{BookPrimerArgs, PoimeaArgs},
    renderer::TerminalRenderer,
};

/// Today's date in UTC.
fn utc_today(now: &Timestamp) -> Date {
    now.to_zoned(TimeZone::UTC).date()
}

fn write_output(dir: &Path, name: &str, contents: &str) -> Result<()> {
    let path = dir.join(name);
    write_document(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Generates the book primer summary and daily checklist.
///
/// An empty catalogue is reported and leaves existing output untouched.
pub fn run_book_primer(args: &BookPrimerArgs, renderer: &TerminalRenderer) -> Result<()> {
    info!("Loading books data from {}", args.data_file.display());
    let catalog = load_books(&args.data_file).context("Failed to load books data")?;

    if catalog.books.is_empty() {
        warn!("No books found in {}", args.data_file.display());
        renderer.render(&format!(
            "Warning: No books found in `{}`, nothing generated.\n",
            args.data_file.display()
        ));
        return Ok(());
    }
    info!("Loaded {} books", catalog.books.len());

    let now = Timestamp::now();
    let summary = render_book_summary(&catalog.books, &now);
    write_output(&args.output_dir, BOOK_SUMMARY_FILE, &summary)?;

    let checklist = BookChecklist::new(utc_today(&now), &now).to_string();
    write_output(&args.output_dir, BOOK_TASK_FILE, &checklist)?;

    renderer.render(&format!(
        "# Book Primer Generation Complete\n\n\
         - **Books:** {}\n\
         - `{BOOK_SUMMARY_FILE}` - Chronologically sorted summary\n\
         - `{BOOK_TASK_FILE}` - Today's task checklist\n",
        catalog.books.len()
    ));
    Ok(())
}

/// Generates the Poimea daily task list and progress report.
pub fn run_poimea(args: &PoimeaArgs, renderer: &TerminalRenderer) -> Result<()> {
    info!("Loading project data from {}", args.data_file.display());
    let project = load_project(&args.data_file).context("Failed to load project data")?;

    let now = Timestamp::now();
    let today = args.today.unwrap_or_else(|| utc_today(&now));
    let targets = calculate_targets(&project, today);
    info!(
        "Targets for {today}: {} words/day, {:.2} scenes/day",
        targets.daily_words, targets.daily_scenes
    );

    let mut rng = rand::thread_rng();
    let tasks = DailyTasks::new(&project, &targets, today, &now, &mut rng).to_string();
    write_output(&args.output_dir, POIMEA_TASK_FILE, &tasks)?;

    let report = ProgressReport::new(&project, &targets, today, &mut rng).to_string();
    write_output(&args.output_dir, POIMEA_REPORT_FILE, &report)?;

    renderer.render(&format!(
        "# Poimea Task Generation Complete\n\n\
         ## Quick Stats\n\n\
         - Words to write today: {}\n\
         - Scenes to storyboard: {:.2}\n\
         - Days until storyboard: {}\n\
         - Days until rough draft: {}\n\n\
         ## Files generated\n\n\
         - `{POIMEA_TASK_FILE}` - Today's task list\n\
         - `{POIMEA_REPORT_FILE}` - Comprehensive progress report\n",
        targets.daily_words,
        targets.daily_scenes,
        targets.days_to_storyboard,
        targets.days_to_draft
    ));
    Ok(())
}
