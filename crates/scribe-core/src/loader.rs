//! JSON input loading.

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use crate::{
    error::{Result, ScribeError},
    models::{BookCatalog, ProjectState},
};

/// Default location of the book catalogue.
pub const BOOKS_DATA_FILE: &str = "books-data.json";

/// Default location of the Poimea project state.
pub const PROJECT_DATA_FILE: &str = "poimea-project.json";

/// Reads `path` and decodes it as JSON into `T`.
///
/// # Errors
///
/// Returns `ScribeError::NotFound` if the file does not exist,
/// `ScribeError::Parse` if the content is not valid JSON for `T`, and
/// `ScribeError::FileSystem` for any other read failure.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| ScribeError::from_read(path, e))?;
    serde_json::from_str(&contents).map_err(|source| ScribeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a book catalogue from `path`.
pub fn load_books(path: impl AsRef<Path>) -> Result<BookCatalog> {
    load_json(path)
}

/// Loads a Poimea project state from `path`.
pub fn load_project(path: impl AsRef<Path>) -> Result<ProjectState> {
    load_json(path)
}
