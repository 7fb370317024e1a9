//! Output file writing.

use std::{fs, path::Path};

use crate::error::{Result, ScribeError};

/// Book primer summary file name.
pub const BOOK_SUMMARY_FILE: &str = "BOOK_PRIMER_SUMMARY.md";

/// Daily book checklist file name.
pub const BOOK_TASK_FILE: &str = "DAILY_BOOK_TASK.md";

/// Poimea daily task list file name.
pub const POIMEA_TASK_FILE: &str = "POIMEA_DAILY_TASK.md";

/// Poimea progress report file name.
pub const POIMEA_REPORT_FILE: &str = "POIMEA_PROGRESS_REPORT.md";

/// Writes `contents` to `path` as UTF-8, replacing any existing file.
///
/// # Errors
///
/// Returns `ScribeError::FileSystem` if the file cannot be written.
pub fn write_document(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|source| ScribeError::FileSystem {
        path: path.to_path_buf(),
        source,
    })
}
