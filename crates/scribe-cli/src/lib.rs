//! Scribe command-line generators
//!
//! Shared pieces of the `book-primer` and `poimea-tasks` binaries: argument
//! parsing, the generator runs and terminal output.

pub mod args;
pub mod pipeline;
pub mod renderer;
