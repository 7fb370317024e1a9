//! Shared fixtures for unit tests.

use jiff::civil::{date, Date};

use crate::models::{BookRecord, ProjectState};

pub(crate) fn book(title: &str, authors: &[&str], date: Date, category: &str) -> BookRecord {
    BookRecord {
        title: title.to_string(),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        date,
        category: category.to_string(),
        description: format!("About {title}"),
        link: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
    }
}

/// The three books used throughout the primer tests, in file order.
pub(crate) fn sample_books() -> Vec<BookRecord> {
    vec![
        book(
            "The Pragmatic Programmer",
            &["David Thomas", "Andrew Hunt"],
            date(1999, 10, 20),
            "Software Engineering",
        ),
        book(
            "Clean Code",
            &["Robert C. Martin"],
            date(2008, 8, 1),
            "Software Engineering",
        ),
        book(
            "Design Patterns",
            &["Erich Gamma", "Richard Helm", "Ralph Johnson", "John Vlissides"],
            date(1994, 10, 21),
            "Software Design",
        ),
    ]
}

pub(crate) const SAMPLE_PROJECT: &str = r#"{
  "project": {
    "title": "Poimea",
    "author": "A. Writer",
    "created_date": "2025-12-26"
  },
  "phases": {
    "book1": {
      "target_word_count": 60500,
      "current_word_count": 12000,
      "chapters_completed": 2,
      "chapters_planned": 12
    }
  },
  "storyboard": {
    "total_scenes": 96,
    "scenes_completed": 20,
    "target_runtime_minutes": 24
  },
  "deadlines": {
    "storyboard_complete": "2026-04-01",
    "book1_rough_draft": "2026-04-26"
  },
  "milestones": [
    {"name": "Outline locked", "target_date": "2026-01-05", "completed": true},
    {"name": "Act one drafted", "target_date": "2026-02-20", "completed": false},
    {"name": "Animatic pass", "target_date": "2026-02-03", "completed": false},
    {"name": "Act two drafted", "target_date": "2026-03-20", "completed": false},
    {"name": "Full storyboard", "target_date": "2026-04-01", "completed": false}
  ],
  "chapters": [
    {"title": "Chapter 1: The Shepherd", "current_words": 5000, "target_words": 5000, "status": "completed"},
    {"title": "Chapter 2: The Flock", "current_words": 5000, "target_words": 5000, "status": "completed"},
    {"title": "Chapter 3: The Storm", "current_words": 2000, "target_words": 5000, "status": "in_progress"},
    {"title": "Chapter 4: The Valley", "current_words": 0, "target_words": 5000, "status": "not_started"}
  ],
  "daily_goals": {
    "rest_days": ["Sunday"]
  }
}"#;

pub(crate) fn sample_project() -> ProjectState {
    serde_json::from_str(SAMPLE_PROJECT).expect("Sample project should parse")
}
