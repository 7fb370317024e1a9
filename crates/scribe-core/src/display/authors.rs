//! Author list formatting.

/// Joins author names into one readable credit line.
///
/// - one name is returned as is
/// - two names are joined with `and`
/// - three or more use commas with an Oxford comma before the last name
///
/// # Panics
///
/// Panics when `authors` is empty. Every book has at least one author, so an
/// empty list is a bug in the caller.
///
/// # Examples
///
/// ```rust
/// use scribe_core::display::format_authors;
///
/// assert_eq!(format_authors(&["Robert C. Martin"]), "Robert C. Martin");
/// assert_eq!(
///     format_authors(&["David Thomas", "Andrew Hunt"]),
///     "David Thomas and Andrew Hunt"
/// );
/// assert_eq!(format_authors(&["A", "B", "C"]), "A, B, and C");
/// ```
pub fn format_authors<S: AsRef<str>>(authors: &[S]) -> String {
    match authors {
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [rest @ .., last] => {
            let rest: Vec<&str> = rest.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", rest.join(", "), last.as_ref())
        }
        [] => panic!("index out of range: cannot format an empty author list"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_author() {
        assert_eq!(format_authors(&["Robert C. Martin"]), "Robert C. Martin");
    }

    #[test]
    fn test_two_authors() {
        let formatted = format_authors(&["David Thomas", "Andrew Hunt"]);
        assert_eq!(formatted, "David Thomas and Andrew Hunt");
        assert_eq!(formatted.matches(" and ").count(), 1);
        assert!(!formatted.contains(','));
    }

    #[test]
    fn test_four_authors_oxford_comma() {
        let authors = ["Erich Gamma", "Richard Helm", "Ralph Johnson", "John Vlissides"];
        assert_eq!(
            format_authors(&authors),
            "Erich Gamma, Richard Helm, Ralph Johnson, and John Vlissides"
        );
    }

    #[test]
    fn test_comma_count_matches_author_count() {
        for n in 3..10 {
            let authors: Vec<String> = (0..n).map(|i| format!("Author {i}")).collect();
            let formatted = format_authors(&authors);
            assert_eq!(formatted.matches(',').count(), n - 1);
            assert!(formatted.ends_with(&format!(", and Author {}", n - 1)));
        }
    }

    #[test]
    fn test_owned_strings() {
        let authors = vec!["Solo".to_string()];
        assert_eq!(format_authors(&authors), "Solo");
    }

    #[test]
    #[should_panic(expected = "empty author list")]
    fn test_empty_author_list_panics() {
        let authors: [&str; 0] = [];
        format_authors(&authors);
    }
}
