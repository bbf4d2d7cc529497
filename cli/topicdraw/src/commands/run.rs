//! Run command (one assignment pass).

use anyhow::Result;
use clap::Args;
use topicdraw_engine::{Assignment, Topic};
use tracing::info;

use crate::error::CliError;
use crate::output::print_assignment;
use crate::roster_file::apply_overrides;

use super::{shuffler, CommandContext};

/// Run command - shuffle the participants and deal them out to topics.
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Participant name. Can be specified multiple times; replaces the
    /// roster's participant list.
    #[arg(long = "person", short = 'p')]
    persons: Vec<String>,

    /// Topic in format NAME=COUNT (e.g., "Topic 1=2"). Can be specified
    /// multiple times; replaces the roster's topic list.
    #[arg(long = "topic", short = 't')]
    topics: Vec<Topic>,

    /// Seed for a reproducible shuffle.
    #[arg(long)]
    seed: Option<u64>,
}

impl RunCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let mut roster = ctx.load_roster()?;
        apply_overrides(&mut roster, self.persons, self.topics);

        info!(
            participants = roster.participants.len(),
            topics = roster.topics.len(),
            demand = roster.demand(),
            seeded = self.seed.is_some(),
            "Running assignment"
        );

        let assignment = roster.assign(shuffler(self.seed).as_mut());
        print_assignment(&assignment, ctx.format, ctx.config.hue_step);

        ensure_filled(&assignment)?;
        Ok(())
    }
}

/// Printing a partial result is fine, but the run still fails.
fn ensure_filled(assignment: &Assignment) -> Result<(), CliError> {
    match assignment.insufficient().count() {
        0 => Ok(()),
        count => Err(CliError::Insufficient { count }),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::Config;
    use crate::output::OutputFormat;

    fn roster_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tdraw-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn context(roster: Option<PathBuf>) -> CommandContext {
        CommandContext {
            config: Config::default(),
            format: OutputFormat::Json,
            roster,
        }
    }

    fn command(persons: &[&str], topics: &[Topic]) -> RunCommand {
        RunCommand {
            persons: persons.iter().map(|p| p.to_string()).collect(),
            topics: topics.to_vec(),
            seed: Some(1),
        }
    }

    #[test]
    fn empty_participant_list_fails_with_insufficient() {
        let path = roster_file("empty", "participants = []\n");
        let result = command(&[], &[Topic::new("T1", 1), Topic::new("T2", 0)])
            .run(context(Some(path.clone())));
        std::fs::remove_file(&path).ok();

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Insufficient { count: 1 })
        ));
        assert_eq!(
            err.to_string(),
            "1 topic(s) could not be filled: there are no participants"
        );
    }

    #[test]
    fn filled_run_succeeds() {
        let result = command(&["Alice", "Bob"], &[Topic::new("T1", 3)]).run(context(None));
        assert!(result.is_ok());
    }

    #[test]
    fn zero_demand_without_participants_is_filled() {
        let assignment = topicdraw_engine::assign_with_order(&[], &[Topic::new("T1", 0)]);
        assert!(ensure_filled(&assignment).is_ok());
    }
}
