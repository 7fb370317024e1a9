use std::path::PathBuf;

use clap::Parser;
use jiff::civil::Date;
use scribe_core::loader::{BOOKS_DATA_FILE, PROJECT_DATA_FILE};

/// Generate a chronologically sorted book primer summary
///
/// Reads the book catalogue, writes BOOK_PRIMER_SUMMARY.md and
/// DAILY_BOOK_TASK.md into the output directory. Every flag is optional, so
/// running the command with no arguments uses the files in the current
/// directory.
#[derive(Parser, Debug)]
#[command(version, about, name = "book-primer")]
pub struct BookPrimerArgs {
    /// Path to the book catalogue JSON file
    #[arg(long, default_value = BOOKS_DATA_FILE)]
    pub data_file: PathBuf,

    /// Directory the Markdown files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}

/// Generate the Poimea daily task list and progress report
///
/// Reads the project state, writes POIMEA_DAILY_TASK.md and
/// POIMEA_PROGRESS_REPORT.md into the output directory. The project file is
/// never modified.
#[derive(Parser, Debug)]
#[command(version, about, name = "poimea-tasks")]
pub struct PoimeaArgs {
    /// Path to the project state JSON file
    #[arg(long, default_value = PROJECT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Directory the Markdown files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Generate as if today were this date (YYYY-MM-DD). Defaults to the
    /// current UTC date
    #[arg(long)]
    pub today: Option<Date>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
