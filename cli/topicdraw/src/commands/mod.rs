//! CLI commands.

mod roster;
mod run;
mod shell;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use topicdraw_engine::{FisherYates, Roster, Shuffle};

use crate::config::Config;
use crate::output::OutputFormat;
use crate::roster_file;

/// tdraw - Randomly assign participants to topics.
#[derive(Debug, Parser)]
#[command(name = "tdraw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Roster file (TOML) with participants and topics.
    ///
    /// Without one, a small starter roster is used.
    #[arg(long, global = true, env = "TDRAW_ROSTER")]
    roster: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one random assignment and print it.
    Run(run::RunCommand),

    /// Show the participants and topics a run would use.
    Roster(roster::RosterCommand),

    /// Edit the roster interactively and run assignments.
    Shell(shell::ShellCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = match self.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        };

        let config = Config::load()?;
        if self.no_color || !config.color {
            colored::control::set_override(false);
        }

        let ctx = CommandContext {
            config,
            format,
            roster: self.roster,
        };

        match self.command {
            Commands::Run(cmd) => cmd.run(ctx),
            Commands::Roster(cmd) => cmd.run(ctx),
            Commands::Shell(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("tdraw {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub roster: Option<PathBuf>,
}

impl CommandContext {
    /// Resolve the roster file, preferring the flag over config.
    pub fn roster_path(&self) -> Option<&Path> {
        self.roster
            .as_deref()
            .or(self.config.default_roster.as_deref())
    }

    /// Load the roster a command starts from.
    pub fn load_roster(&self) -> Result<Roster> {
        Ok(roster_file::base_roster(self.roster_path())?)
    }
}

/// Shuffle for a run: reproducible when seeded.
fn shuffler(seed: Option<u64>) -> Box<dyn Shuffle> {
    match seed {
        Some(seed) => Box::new(FisherYates::seeded(seed)),
        None => Box::new(FisherYates::thread_local()),
    }
}
