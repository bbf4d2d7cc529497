//! topicdraw (tdraw) - draw random topic groups
//!
//! Shuffles a participant list once and deals it out across topics,
//! reusing the shuffled order when demand exceeds the list.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;
mod roster_file;

use commands::Cli;

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
