//! End-to-end tests of the load, transform, render and write pipeline.

mod common;

use common::{write_input, THREE_BOOKS};
use jiff::{civil::date, Timestamp};
use rand::{rngs::StdRng, SeedableRng};
use scribe_core::{
    calculate_targets, load_books, load_project, render_book_summary, write_document,
    writer::{BOOK_SUMMARY_FILE, POIMEA_REPORT_FILE, POIMEA_TASK_FILE},
    DailyTasks, ProgressReport, ScribeError,
};

const PROJECT: &str = r#"{
  "project": {"title": "Poimea", "author": "A. Writer", "created_date": "2025-12-26"},
  "phases": {"book1": {"target_word_count": 50000, "current_word_count": 0,
                       "chapters_completed": 0, "chapters_planned": 10}},
  "storyboard": {"total_scenes": 60, "scenes_completed": 0, "target_runtime_minutes": 20},
  "deadlines": {"storyboard_complete": "2026-04-26", "book1_rough_draft": "2026-04-26"},
  "milestones": [],
  "chapters": []
}"#;

#[test]
fn test_three_books_end_to_end() {
    let (temp_dir, path) = write_input("books-data.json", THREE_BOOKS);
    let catalog = load_books(&path).expect("Failed to load books");
    let now = Timestamp::now();

    let summary = render_book_summary(&catalog.books, &now);
    let output_path = temp_dir.path().join(BOOK_SUMMARY_FILE);
    write_document(&output_path, &summary).expect("Failed to write summary");

    let written = std::fs::read_to_string(&output_path).expect("Failed to read summary");
    let patterns = written.find("Design Patterns").unwrap();
    let pragmatic = written.find("The Pragmatic Programmer").unwrap();
    let clean = written.find("Clean Code").unwrap();
    assert!(patterns < pragmatic && pragmatic < clean);
    assert!(written.contains("Total Books:** 3"));
}

#[test]
fn test_missing_books_file_is_not_found() {
    let (temp_dir, _) = write_input("other.json", "{}");
    let err = load_books(temp_dir.path().join("books-data.json")).unwrap_err();
    assert!(matches!(err, ScribeError::NotFound { .. }));
}

#[test]
fn test_truncated_json_is_parse_error() {
    let (_temp_dir, path) = write_input("books-data.json", &THREE_BOOKS[..40]);
    let err = load_books(&path).unwrap_err();
    assert!(matches!(err, ScribeError::Parse { .. }));
}

#[test]
fn test_project_pipeline_one_week_out() {
    let (temp_dir, path) = write_input("poimea-project.json", PROJECT);
    let project = load_project(&path).expect("Failed to load project");
    let today = date(2026, 4, 19);
    let now = Timestamp::now();
    let mut rng = StdRng::seed_from_u64(9);

    let targets = calculate_targets(&project, today);
    assert_eq!(targets.working_days_draft, 6);
    assert_eq!(targets.daily_words, 8333);

    let tasks = DailyTasks::new(&project, &targets, today, &now, &mut rng).to_string();
    let report = ProgressReport::new(&project, &targets, today, &mut rng).to_string();

    write_document(temp_dir.path().join(POIMEA_TASK_FILE), &tasks).unwrap();
    write_document(temp_dir.path().join(POIMEA_REPORT_FILE), &report).unwrap();

    // 2026-04-19 is a Sunday, the default rest day
    assert!(tasks.contains("## 🌟 Rest Day"));
    assert!(tasks.contains("- **Average Daily Pace Needed:** 8333 words + 10.00 scenes"));
    assert!(report.contains("| **Required Daily Pace** | 8333 words/day |"));
    assert!(report.contains("**Writing Pace:** ⚠️ Behind schedule"));
    assert!(temp_dir.path().join(POIMEA_TASK_FILE).exists());
    assert!(temp_dir.path().join(POIMEA_REPORT_FILE).exists());
}
