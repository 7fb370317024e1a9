//! Markdown rendering of the generated documents.
//!
//! Every document is a small struct holding references to its inputs and
//! implementing [`std::fmt::Display`], so rendering is `to_string()` and
//! writing the result is left to [`crate::writer`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Models and     │    │ Document        │    │   Markdown      │
//! │  derived values │───▶│ wrappers        │───▶│   text          │
//! │  (pace, decades)│    │ (Display impls) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`summary`]: book primer summary grouped by decade
//! - [`checklist`]: daily book curation checklist
//! - [`daily`]: Poimea daily task list
//! - [`report`]: Poimea progress report
//! - [`authors`], [`datetime`], [`numbers`]: value formatters
//! - [`inspiration`]: tip and quote pools
//!
//! Documents that include random tips or quotes take the RNG at construction,
//! so seeded tests render deterministically.

pub mod authors;
pub mod checklist;
pub mod daily;
pub mod datetime;
pub mod inspiration;
pub mod numbers;
pub mod report;
pub mod summary;

pub use authors::format_authors;
pub use checklist::BookChecklist;
pub use daily::DailyTasks;
pub use datetime::{GeneratedAt, IsoDate, LongDate};
pub use numbers::{SignedThousands, Thousands};
pub use report::ProgressReport;
pub use summary::{render_book_summary, BookSummary};
