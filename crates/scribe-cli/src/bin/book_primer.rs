//! Book primer generator
//!
//! Writes the chronologically sorted summary and the daily checklist.

use anyhow::Result;
use clap::Parser;
use log::info;
use scribe_cli::{
    args::BookPrimerArgs,
    pipeline::run_book_primer,
    renderer::{OutputStyle, TerminalRenderer},
};

fn main() -> Result<()> {
    env_logger::init();

    let args = BookPrimerArgs::parse();
    let renderer = TerminalRenderer::new(OutputStyle::detect(args.no_color));

    info!("Book primer generator started");

    run_book_primer(&args, &renderer)
}
