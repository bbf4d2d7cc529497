//! Shell command (interactive roster editing).
//!
//! Edits are held in memory for the life of the session only.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use topicdraw_engine::{parse_required_count, Assignment, Roster, Shuffle, Topic};
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_assignment, print_done, print_info, print_roster};

use super::{shuffler, CommandContext};

const HELP: &str = "\
Commands (row numbers start at 1):
  list                      show participants and topics
  add-person [NAME]         add a participant
  set-person ROW NAME       rename a participant
  remove-person ROW         remove a participant
  add-topic [NAME[=COUNT]]  add a topic
  rename-topic ROW NAME     rename a topic
  set-count ROW COUNT       set how many participants a topic needs
  remove-topic ROW          remove a topic
  run                       draw a new assignment
  help                      show this text
  quit                      leave the shell";

/// Shell command - edit participants and topics, then run.
#[derive(Debug, Args)]
pub struct ShellCommand {
    /// Seed for reproducible shuffles within the session.
    #[arg(long)]
    seed: Option<u64>,
}

impl ShellCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let roster = ctx.load_roster()?;
        let mut session = Session::new(roster, shuffler(self.seed));

        print_info("Type `help` for commands.");

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("tdraw> ");
            io::stdout().flush().context("failed to flush prompt")?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                println!();
                return Ok(());
            }

            let input = match parse_line(&line) {
                Ok(input) => input,
                Err(e) => {
                    crate::error::print_error(&e);
                    continue;
                }
            };

            match session.execute(input) {
                Ok(Reply::Quit) => return Ok(()),
                Ok(reply) => render(&reply, &session, &ctx),
                Err(e) => crate::error::print_error(&e),
            }
        }
    }
}

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    List,
    AddPerson(String),
    SetPerson(usize, String),
    RemovePerson(usize),
    AddTopic(Topic),
    RenameTopic(usize, String),
    SetCount(usize, usize),
    RemoveTopic(usize),
    Run,
    Help,
    Quit,
}

/// Parse a shell line. Rows are 1-based on input and 0-based in [`Input`].
pub fn parse_line(line: &str) -> Result<Input> {
    let line = line.trim();
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    let input = match cmd {
        "" => Input::Empty,
        "list" | "ls" => Input::List,
        "add-person" => Input::AddPerson(rest.to_string()),
        "set-person" => {
            let (row, name) = row_and_rest(rest)?;
            Input::SetPerson(row, name.to_string())
        }
        "remove-person" => Input::RemovePerson(parse_row(rest)?),
        "add-topic" => {
            if rest.contains('=') {
                Input::AddTopic(rest.parse().map_err(CliError::from)?)
            } else {
                Input::AddTopic(Topic::new(rest, 0))
            }
        }
        "rename-topic" => {
            let (row, name) = row_and_rest(rest)?;
            Input::RenameTopic(row, name.to_string())
        }
        "set-count" => {
            let (row, count) = row_and_rest(rest)?;
            Input::SetCount(row, parse_required_count(count))
        }
        "remove-topic" => Input::RemoveTopic(parse_row(rest)?),
        "run" => Input::Run,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => anyhow::bail!("Unknown command '{}'. Type `help` for commands.", other),
    };

    Ok(input)
}

fn parse_row(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(row) if row > 0 => Ok(row - 1),
        _ => anyhow::bail!("Expected a row number starting at 1, got '{}'", raw.trim()),
    }
}

fn row_and_rest(rest: &str) -> Result<(usize, &str)> {
    let (row, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    Ok((parse_row(row)?, tail.trim()))
}

/// What to show after a command.
#[derive(Debug)]
pub enum Reply {
    Nothing,
    Roster,
    Done(String),
    Assignment(Assignment),
    Help,
    Quit,
}

/// An editing session: the roster plus the shuffle used for runs.
pub struct Session {
    roster: Roster,
    shuffle: Box<dyn Shuffle>,
}

impl Session {
    pub fn new(roster: Roster, shuffle: Box<dyn Shuffle>) -> Self {
        Self { roster, shuffle }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn execute(&mut self, input: Input) -> Result<Reply> {
        debug!(?input, "Shell command");

        let reply = match input {
            Input::Empty => Reply::Nothing,
            Input::List => Reply::Roster,
            Input::AddPerson(name) => {
                let done = format!("Added participant '{}'", name);
                self.roster.add_participant(name);
                Reply::Done(done)
            }
            Input::SetPerson(row, name) => {
                let done = format!("Renamed participant {} to '{}'", row + 1, name);
                self.roster
                    .rename_participant(row, name)
                    .map_err(CliError::from)?;
                Reply::Done(done)
            }
            Input::RemovePerson(row) => {
                let name = self
                    .roster
                    .remove_participant(row)
                    .map_err(CliError::from)?;
                Reply::Done(format!("Removed participant '{}'", name))
            }
            Input::AddTopic(topic) => {
                let done = format!("Added topic '{}' needing {}", topic.name, topic.required);
                self.roster.add_topic(topic.name, topic.required);
                Reply::Done(done)
            }
            Input::RenameTopic(row, name) => {
                let done = format!("Renamed topic {} to '{}'", row + 1, name);
                self.roster.rename_topic(row, name).map_err(CliError::from)?;
                Reply::Done(done)
            }
            Input::SetCount(row, count) => {
                self.roster
                    .set_required(row, count)
                    .map_err(CliError::from)?;
                Reply::Done(format!("Topic {} now needs {}", row + 1, count))
            }
            Input::RemoveTopic(row) => {
                let topic = self.roster.remove_topic(row).map_err(CliError::from)?;
                Reply::Done(format!("Removed topic '{}'", topic.name))
            }
            Input::Run => Reply::Assignment(self.roster.assign(self.shuffle.as_mut())),
            Input::Help => Reply::Help,
            Input::Quit => Reply::Quit,
        };

        Ok(reply)
    }
}

fn render(reply: &Reply, session: &Session, ctx: &CommandContext) {
    match reply {
        Reply::Nothing | Reply::Quit => {}
        Reply::Roster => print_roster(session.roster(), ctx.format),
        Reply::Done(message) => print_done(message, ctx.format),
        Reply::Assignment(assignment) => {
            print_assignment(assignment, ctx.format, ctx.config.hue_step)
        }
        Reply::Help => println!("{}", HELP),
    }
}
