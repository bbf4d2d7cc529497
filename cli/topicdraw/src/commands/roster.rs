//! Roster command (show the resolved roster).

use anyhow::Result;
use clap::Args;
use topicdraw_engine::Topic;

use crate::output::print_roster;
use crate::roster_file::apply_overrides;

use super::CommandContext;

/// Show the participants and topics after file and flag overrides.
#[derive(Debug, Args)]
pub struct RosterCommand {
    /// Participant name; replaces the roster's participant list.
    #[arg(long = "person", short = 'p')]
    persons: Vec<String>,

    /// Topic in format NAME=COUNT; replaces the roster's topic list.
    #[arg(long = "topic", short = 't')]
    topics: Vec<Topic>,
}

impl RosterCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let mut roster = ctx.load_roster()?;
        apply_overrides(&mut roster, self.persons, self.topics);
        print_roster(&roster, ctx.format);
        Ok(())
    }
}
