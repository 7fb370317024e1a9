//! Book catalogue model definitions.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A single book entry in the primer catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookRecord {
    /// Title of the book
    pub title: String,

    /// Authors in credited order (never empty)
    pub authors: Vec<String>,

    /// Publication date
    pub date: Date,

    /// Free-form category name used for statistics
    pub category: String,

    /// Short description shown under the heading
    pub description: String,

    /// URL the title links to
    pub link: String,
}

/// Root of the `books-data.json` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookCatalog {
    /// All books, in file order
    #[serde(default)]
    pub books: Vec<BookRecord>,
}
