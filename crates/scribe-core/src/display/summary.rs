//! Book primer summary page.

use std::{collections::BTreeMap, fmt};

use jiff::Timestamp;

use super::{
    authors::format_authors,
    datetime::{GeneratedAt, LongDate},
};
use crate::{
    models::BookRecord,
    timeline::{group_by_decade, sort_chronologically},
};

/// Markdown summary of the book catalogue, grouped by decade.
///
/// The records are re-sorted before rendering, so callers may pass them in
/// any order.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use scribe_core::display::BookSummary;
///
/// let now = Timestamp::now();
/// let output = BookSummary::new(&[], &now).to_string();
/// assert!(output.contains("- **Total Books:** 0"));
/// assert!(!output.contains("### "));
/// ```
pub struct BookSummary<'a> {
    books: Vec<&'a BookRecord>,
    generated_at: &'a Timestamp,
}

impl<'a> BookSummary<'a> {
    pub fn new(books: &'a [BookRecord], generated_at: &'a Timestamp) -> Self {
        Self {
            books: sort_chronologically(books),
            generated_at,
        }
    }

    /// Number of books per category, ordered by category name.
    pub fn category_counts(&self) -> BTreeMap<&'a str, usize> {
        let mut counts = BTreeMap::new();
        for &book in &self.books {
            *counts.entry(book.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    fn fmt_book(book: &BookRecord, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "#### [{}]({}) ({})",
            book.title,
            book.link,
            book.date.year()
        )?;
        writeln!(f)?;
        writeln!(f, "**Authors:** {}  ", format_authors(&book.authors))?;
        writeln!(f, "**Category:** {}  ", book.category)?;
        writeln!(f, "**Published:** {}  ", LongDate(book.date))?;
        writeln!(f)?;
        writeln!(f, "{}", book.description)?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)
    }

    fn fmt_statistics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n## Statistics")?;
        writeln!(f)?;
        writeln!(f, "- **Total Books:** {}", self.books.len())?;
        writeln!(f, "- **By Category:**")?;
        for (category, count) in self.category_counts() {
            writeln!(f, "  - {category}: {count}")?;
        }

        if let (Some(oldest), Some(newest)) = (self.books.first(), self.books.last()) {
            writeln!(
                f,
                "- **Date Range:** {} to {}",
                LongDate(oldest.date),
                LongDate(newest.date)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for BookSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Book Primer Summary")?;
        writeln!(f)?;
        writeln!(f, "*Last updated: {}*", GeneratedAt(self.generated_at))?;
        writeln!(f)?;
        writeln!(
            f,
            "This page contains a chronologically sorted list of essential books, automatically updated daily."
        )?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "## Books in Chronological Order")?;
        writeln!(f)?;

        for bucket in group_by_decade(&self.books) {
            writeln!(f, "\n### {}", bucket.label())?;
            writeln!(f)?;
            for book in bucket.records {
                Self::fmt_book(book, f)?;
            }
        }

        self.fmt_statistics(f)?;

        writeln!(f, "\n---")?;
        writeln!(f)?;
        writeln!(
            f,
            "*This summary is automatically generated daily by the Book Primer Generator.*"
        )
    }
}

/// Renders the summary page for `books` as a string.
pub fn render_book_summary(books: &[BookRecord], generated_at: &Timestamp) -> String {
    BookSummary::new(books, generated_at).to_string()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::testing::{book, sample_books};

    fn fixed_time() -> Timestamp {
        "2026-10-19T09:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_summary_header() {
        let now = fixed_time();
        let output = render_book_summary(&sample_books(), &now);

        assert!(output.starts_with("# Book Primer Summary\n"));
        assert!(output.contains("*Last updated: October 19, 2026 at 09:00 UTC*"));
        assert!(output.contains("## Books in Chronological Order"));
    }

    #[test]
    fn test_summary_orders_books_by_date() {
        let now = fixed_time();
        let output = render_book_summary(&sample_books(), &now);

        let patterns = output.find("Design Patterns").unwrap();
        let pragmatic = output.find("The Pragmatic Programmer").unwrap();
        let clean = output.find("Clean Code").unwrap();
        assert!(patterns < pragmatic);
        assert!(pragmatic < clean);
    }

    #[test]
    fn test_summary_decade_sections() {
        let now = fixed_time();
        let output = render_book_summary(&sample_books(), &now);

        assert!(output.contains("\n### 1990s\n"));
        assert!(output.contains("\n### 2000s\n"));
        assert!(output.find("### 1990s").unwrap() < output.find("### 2000s").unwrap());
    }

    #[test]
    fn test_summary_book_entry() {
        let now = fixed_time();
        let output = render_book_summary(&sample_books(), &now);

        assert!(output.contains("#### [Clean Code](https://example.com/clean-code) (2008)"));
        assert!(output.contains("**Authors:** David Thomas and Andrew Hunt  \n"));
        assert!(output.contains(
            "**Authors:** Erich Gamma, Richard Helm, Ralph Johnson, and John Vlissides  \n"
        ));
        assert!(output.contains("**Category:** Software Design  \n"));
        assert!(output.contains("**Published:** October 21, 1994  \n"));
        assert!(output.contains("About Clean Code"));
    }

    #[test]
    fn test_summary_statistics() {
        let now = fixed_time();
        let output = render_book_summary(&sample_books(), &now);

        assert!(output.contains("- **Total Books:** 3"));
        assert!(output.contains("  - Software Design: 1\n  - Software Engineering: 2\n"));
        assert!(output.contains("- **Date Range:** October 21, 1994 to August 01, 2008"));
        assert!(output.ends_with(
            "*This summary is automatically generated daily by the Book Primer Generator.*\n"
        ));
    }

    #[test]
    fn test_summary_categories_alphabetical() {
        let books = vec![
            book("Zeta", &["Z"], date(2001, 1, 1), "Zoology"),
            book("Alpha", &["A"], date(2002, 1, 1), "Algorithms"),
            book("Mu", &["M"], date(2003, 1, 1), "Mathematics"),
        ];
        let now = fixed_time();
        let output = render_book_summary(&books, &now);

        let algorithms = output.find("  - Algorithms: 1").unwrap();
        let mathematics = output.find("  - Mathematics: 1").unwrap();
        let zoology = output.find("  - Zoology: 1").unwrap();
        assert!(algorithms < mathematics && mathematics < zoology);
    }

    #[test]
    fn test_summary_empty() {
        let now = fixed_time();
        let output = render_book_summary(&[], &now);

        assert!(output.contains("- **Total Books:** 0"));
        assert!(output.contains("- **By Category:**\n"));
        assert!(!output.contains("### "));
        assert!(!output.contains("Date Range"));
    }

    #[test]
    fn test_summary_sorts_unsorted_input() {
        let books = vec![
            book("Newer", &["N"], date(1998, 1, 1), "A"),
            book("Older", &["O"], date(1991, 1, 1), "A"),
        ];
        let now = fixed_time();
        let output = render_book_summary(&books, &now);

        assert!(output.find("Older").unwrap() < output.find("Newer").unwrap());
        assert!(output.contains("- **Date Range:** January 01, 1991 to January 01, 1998"));
    }

    #[test]
    fn test_category_counts() {
        let books = sample_books();
        let now = fixed_time();
        let summary = BookSummary::new(&books, &now);
        let counts = summary.category_counts();

        assert_eq!(counts.get("Software Engineering"), Some(&2));
        assert_eq!(counts.get("Software Design"), Some(&1));
    }
}
