//! Data models for the book catalogue and the Poimea project.
//!
//! Models are plain serde structures decoded straight from the input JSON.
//! Markdown rendering lives in [`crate::display`] so the data definitions stay
//! free of presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use scribe_core::models::BookRecord;
//!
//! let book: BookRecord = serde_json::from_str(
//!     r#"{
//!         "title": "Design Patterns",
//!         "authors": ["Erich Gamma", "Richard Helm"],
//!         "date": "1994-10-21",
//!         "category": "Software Design",
//!         "description": "Elements of reusable object-oriented software",
//!         "link": "https://example.com/patterns"
//!     }"#,
//! )
//! .unwrap();
//! assert_eq!(book.date, date(1994, 10, 21));
//! ```

pub mod book;
pub mod project;
pub mod status;


pub use book::{BookCatalog, BookRecord};
pub use project::{
    BookPhase, Chapter, DailyGoals, Deadlines, Milestone, Phases, ProjectInfo, ProjectState,
    Storyboard,
};
pub use status::ChapterStatus;
