//! Error handling and display for the CLI.

use std::path::PathBuf;

use colored::Colorize;
use thiserror::Error;
use topicdraw_engine::RosterError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Could not read roster file {}: {source}", path.display())]
    RosterRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid roster file {}: {source}", path.display())]
    RosterParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{0}")]
    Roster(#[from] RosterError),

    #[error("{count} topic(s) could not be filled: there are no participants")]
    Insufficient { count: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::RosterRead { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Check the --roster path or TDRAW_ROSTER.".yellow()
                );
            }
            CliError::RosterParse { .. } => {
                eprintln!(
                    "\n{}",
                    concat!(
                        "Hint: Expected `participants = [...]` and `[[topics]]` tables ",
                        "with `name` and `required`."
                    )
                    .yellow()
                );
            }
            CliError::Roster(e) if e.is_index_error() => {
                eprintln!(
                    "\n{}",
                    "Hint: Rows start at 1; `list` in the shell or `tdraw roster` shows them."
                        .yellow()
                );
            }
            CliError::Insufficient { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Add participants with --person or in the roster file.".yellow()
                );
            }
            _ => {}
        }
    }
}
