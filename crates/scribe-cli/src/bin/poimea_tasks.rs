//! Poimea task generator
//!
//! Writes today's task list and the progress report for the writing project.

use anyhow::Result;
use clap::Parser;
use log::info;
use scribe_cli::{
    args::PoimeaArgs,
    pipeline::run_poimea,
    renderer::{OutputStyle, TerminalRenderer},
};

fn main() -> Result<()> {
    env_logger::init();

    let args = PoimeaArgs::parse();
    let renderer = TerminalRenderer::new(OutputStyle::detect(args.no_color));

    info!("Poimea task generator started");

    run_poimea(&args, &renderer)
}
