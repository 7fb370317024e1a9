use std::path::PathBuf;

use tempfile::TempDir;

pub const THREE_BOOKS: &str = r#"{
  "books": [
    {
      "title": "The Pragmatic Programmer",
      "authors": ["David Thomas", "Andrew Hunt"],
      "date": "1999-10-20",
      "category": "Software Engineering",
      "description": "A classic guide to software craftsmanship",
      "link": "https://example.com/pragmatic"
    },
    {
      "title": "Clean Code",
      "authors": ["Robert C. Martin"],
      "date": "2008-08-01",
      "category": "Software Engineering",
      "description": "A handbook of agile software craftsmanship",
      "link": "https://example.com/cleancode"
    },
    {
      "title": "Design Patterns",
      "authors": ["Erich Gamma", "Richard Helm", "Ralph Johnson", "John Vlissides"],
      "date": "1994-10-21",
      "category": "Software Design",
      "description": "Elements of reusable object-oriented software",
      "link": "https://example.com/patterns"
    }
  ]
}"#;

/// Helper function to write `contents` into a file inside a fresh temp dir
pub fn write_input(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write input file");
    (temp_dir, path)
}
