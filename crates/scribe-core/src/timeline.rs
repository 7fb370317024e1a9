//! Chronological ordering and decade bucketing.

use jiff::civil::Date;

use crate::models::{BookRecord, Milestone};

/// A record positioned on the calendar.
pub trait Dated {
    /// The date used for chronological ordering.
    fn date(&self) -> Date;
}

impl Dated for BookRecord {
    fn date(&self) -> Date {
        self.date
    }
}

impl Dated for Milestone {
    fn date(&self) -> Date {
        self.target_date
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn date(&self) -> Date {
        (**self).date()
    }
}

/// Returns a copy of `records` ordered oldest first.
///
/// The sort is stable, so records sharing a date keep their relative order,
/// and the input is left untouched.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::{date, Date};
/// use scribe_core::timeline::{sort_chronologically, Dated};
///
/// struct Entry(&'static str, Date);
/// impl Dated for Entry {
///     fn date(&self) -> Date {
///         self.1
///     }
/// }
///
/// let entries = [Entry("b", date(2001, 1, 1)), Entry("a", date(2000, 1, 1))];
/// let sorted = sort_chronologically(&entries);
/// assert_eq!(sorted[0].0, "a");
/// ```
pub fn sort_chronologically<T: Dated>(records: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by_key(|record| record.date());
    sorted
}

/// First year of the decade containing `date`, e.g. `1990` for 1994.
pub fn decade_of(date: Date) -> i16 {
    date.year().div_euclid(10) * 10
}

/// Records published within one decade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecadeBucket<'a, T> {
    /// First year of the decade
    pub decade: i16,
    /// Records in chronological order
    pub records: Vec<&'a T>,
}

impl<T> DecadeBucket<'_, T> {
    /// Heading label such as `1990s`.
    pub fn label(&self) -> String {
        format!("{}s", self.decade)
    }
}

/// Groups records into decade buckets in ascending decade order.
///
/// Records are ordered by the key `(decade, date)` with a stable sort before
/// grouping, so bucket order never depends on the input order and records
/// within a bucket are chronological.
pub fn group_by_decade<T: Dated>(records: &[T]) -> Vec<DecadeBucket<'_, T>> {
    let mut ordered: Vec<&T> = records.iter().collect();
    ordered.sort_by_key(|record| (decade_of(record.date()), record.date()));

    let mut buckets: Vec<DecadeBucket<'_, T>> = Vec::new();
    for record in ordered {
        let decade = decade_of(record.date());
        match buckets.last_mut() {
            Some(bucket) if bucket.decade == decade => bucket.records.push(record),
            _ => buckets.push(DecadeBucket {
                decade,
                records: vec![record],
            }),
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::testing::{book, sample_books};

    fn titles<'a>(records: &[&'a BookRecord]) -> Vec<&'a str> {
        records.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_sort_ascending_order() {
        let books = sample_books();
        let sorted = sort_chronologically(&books);

        assert_eq!(
            titles(&sorted),
            vec!["Design Patterns", "The Pragmatic Programmer", "Clean Code"]
        );
        // Input is not reordered
        assert_eq!(books[0].title, "The Pragmatic Programmer");
    }

    #[test]
    fn test_sort_is_idempotent() {
        let books = sample_books();
        let once: Vec<BookRecord> = sort_chronologically(&books).into_iter().cloned().collect();
        let twice = sort_chronologically(&once);

        assert_eq!(titles(&twice), titles(&once.iter().collect::<Vec<_>>()));
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let same_day = date(2010, 5, 5);
        let books = vec![
            book("Later", &["X"], date(2011, 1, 1), "A"),
            book("First Same", &["X"], same_day, "A"),
            book("Second Same", &["X"], same_day, "A"),
            book("Third Same", &["X"], same_day, "A"),
        ];
        let sorted = sort_chronologically(&books);

        assert_eq!(
            titles(&sorted),
            vec!["First Same", "Second Same", "Third Same", "Later"]
        );
    }

    #[test]
    fn test_sort_empty() {
        let books: Vec<BookRecord> = vec![];
        assert!(sort_chronologically(&books).is_empty());
    }

    #[test]
    fn test_decade_of() {
        assert_eq!(decade_of(date(1994, 10, 21)), 1990);
        assert_eq!(decade_of(date(2000, 1, 1)), 2000);
        assert_eq!(decade_of(date(1999, 12, 31)), 1990);
        assert_eq!(decade_of(date(2009, 12, 31)), 2000);
    }

    #[test]
    fn test_group_by_decade_orders_buckets() {
        let books = vec![
            book("Millennium", &["X"], date(2000, 1, 1), "A"),
            book("Nineties Late", &["X"], date(1999, 10, 20), "A"),
            book("Nineties Early", &["X"], date(1994, 10, 21), "A"),
            book("Seventies", &["X"], date(1975, 6, 1), "A"),
        ];
        let buckets = group_by_decade(&books);

        let labels: Vec<String> = buckets.iter().map(DecadeBucket::label).collect();
        assert_eq!(labels, vec!["1970s", "1990s", "2000s"]);
        assert_eq!(
            titles(&buckets[1].records),
            vec!["Nineties Early", "Nineties Late"]
        );
        assert_eq!(titles(&buckets[2].records), vec!["Millennium"]);
    }

    #[test]
    fn test_group_by_decade_empty() {
        let books: Vec<BookRecord> = vec![];
        assert!(group_by_decade(&books).is_empty());
    }
}
