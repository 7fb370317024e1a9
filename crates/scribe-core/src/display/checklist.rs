//! Daily maintenance checklist for the book catalogue.

use std::fmt;

use jiff::{civil::Date, Timestamp};

use super::datetime::{GeneratedAt, IsoDate};

const TASKS: &[&str] = &[
    "Review the chronologically sorted book list",
    "Add any new books to `books-data.json`",
    "Verify all publication dates are accurate",
    "Check that all links are working",
    "Update book descriptions if needed",
    "Review categorization",
    "Commit any changes",
];

const ENTRY_TEMPLATE: &str = r#"{
  "title": "Book Title",
  "authors": ["Author Name"],
  "date": "YYYY-MM-DD",
  "category": "Category Name",
  "description": "Brief description",
  "link": "https://book-url.com"
}"#;

/// Checklist of curation tasks for one day.
pub struct BookChecklist<'a> {
    today: Date,
    generated_at: &'a Timestamp,
}

impl<'a> BookChecklist<'a> {
    pub fn new(today: Date, generated_at: &'a Timestamp) -> Self {
        Self {
            today,
            generated_at,
        }
    }
}

impl fmt::Display for BookChecklist<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Daily Book Primer Task - {}", IsoDate(self.today))?;
        writeln!(f)?;
        writeln!(f, "## Today's Tasks")?;
        writeln!(f)?;
        for task in TASKS {
            writeln!(f, "- [ ] {task}")?;
        }
        writeln!(f)?;
        writeln!(f, "## Quick Commands")?;
        writeln!(f)?;
        writeln!(
            f,
            "To add a new book, edit `books-data.json` and add an entry like:"
        )?;
        writeln!(f)?;
        writeln!(f, "```json")?;
        writeln!(f, "{ENTRY_TEMPLATE}")?;
        writeln!(f, "```")?;
        writeln!(f)?;
        writeln!(f, "Then run:")?;
        writeln!(f, "```bash")?;
        writeln!(f, "book-primer")?;
        writeln!(f, "```")?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "*Generated: {}*", GeneratedAt(self.generated_at))
    }
}
