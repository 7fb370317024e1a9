//! Core library for the Scribe report generators.
//!
//! Both generators follow the same pipeline:
//!
//! ```text
//! Loader ──▶ Transformer ──▶ Renderer ──▶ Writer
//! (loader)   (timeline,      (display)    (writer)
//!             pace)
//! ```
//!
//! - [`loader`] decodes the JSON input into [`models`]
//! - [`timeline`] orders records by date and buckets them by decade
//! - [`pace`] derives deadlines, working days and required daily pace
//! - [`display`] renders Markdown documents through `Display` wrappers
//! - [`writer`] replaces the output files
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::{civil::date, Timestamp};
//! use scribe_core::{models::BookRecord, render_book_summary};
//!
//! let books = vec![BookRecord {
//!     title: "Design Patterns".to_string(),
//!     authors: vec!["Erich Gamma".to_string(), "Richard Helm".to_string()],
//!     date: date(1994, 10, 21),
//!     category: "Software Design".to_string(),
//!     description: "Elements of reusable object-oriented software".to_string(),
//!     link: "https://example.com/patterns".to_string(),
//! }];
//!
//! let summary = render_book_summary(&books, &Timestamp::now());
//! assert!(summary.contains("### 1990s"));
//! assert!(summary.contains("- **Total Books:** 1"));
//! ```

pub mod display;
pub mod error;
pub mod loader;
pub mod models;
pub mod pace;
pub mod timeline;
pub mod writer;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use display::{
    format_authors, render_book_summary, BookChecklist, BookSummary, DailyTasks, ProgressReport,
};
pub use error::{Result, ScribeError};
pub use loader::{load_books, load_json, load_project};
pub use models::{BookCatalog, BookRecord, ProjectState};
pub use pace::{calculate_targets, Targets};
pub use timeline::{group_by_decade, sort_chronologically, Dated};
pub use writer::write_document;
