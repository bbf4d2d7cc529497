//! Roster file loading and command-line overrides.
//!
//! A roster file is TOML:
//!
//! ```toml
//! participants = ["Alice", "Bob"]
//!
//! [[topics]]
//! name = "Topic 1"
//! required = 2
//! ```

use std::path::Path;

use topicdraw_engine::{Roster, Topic};
use tracing::{debug, info};

use crate::error::CliError;

pub fn roster_from_toml_str(contents: &str) -> Result<Roster, toml::de::Error> {
    toml::from_str(contents)
}

pub fn load_roster(path: &Path) -> Result<Roster, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::RosterRead {
        path: path.to_path_buf(),
        source,
    })?;

    let roster = roster_from_toml_str(&contents).map_err(|source| CliError::RosterParse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        participants = roster.participants.len(),
        topics = roster.topics.len(),
        "Roster loaded"
    );
    Ok(roster)
}

/// Pick the base roster: the file when one is given, the starter roster
/// otherwise.
pub fn base_roster(path: Option<&Path>) -> Result<Roster, CliError> {
    match path {
        Some(path) => load_roster(path),
        None => {
            debug!("No roster file; using the starter roster");
            Ok(Roster::sample())
        }
    }
}

/// Replace whole lists with the ones given on the command line. An empty
/// override leaves that list alone.
pub fn apply_overrides(roster: &mut Roster, participants: Vec<String>, topics: Vec<Topic>) {
    if !participants.is_empty() {
        roster.participants = participants;
    }
    if !topics.is_empty() {
        roster.topics = topics;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roster_with_defaults() {
        let roster = roster_from_toml_str(
            r#"
participants = ["Alice", "", "Alice"]

[[topics]]
name = "Lab"
required = 3

[[topics]]
name = "Open"
"#,
        )
        .unwrap();

        assert_eq!(roster.participants, vec!["Alice", "", "Alice"]);
        assert_eq!(roster.topics, vec![Topic::new("Lab", 3), Topic::new("Open", 0)]);
    }

    #[test]
    fn empty_file_is_empty_roster() {
        assert_eq!(roster_from_toml_str("").unwrap(), Roster::new());
    }

    #[test]
    fn negative_count_is_rejected_by_parser() {
        let err = roster_from_toml_str("[[topics]]\nname = \"x\"\nrequired = -1\n");
        assert!(err.is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_roster(Path::new("/nonexistent/roster.toml")).unwrap_err();
        assert!(matches!(err, CliError::RosterRead { .. }));
        assert!(err.to_string().contains("/nonexistent/roster.toml"));
    }

    #[test]
    fn no_path_uses_starter_roster() {
        assert_eq!(base_roster(None).unwrap(), Roster::sample());
    }

    #[test]
    fn overrides_replace_whole_lists() {
        let mut roster = Roster::sample();
        apply_overrides(&mut roster, vec!["Zed".to_string()], Vec::new());

        assert_eq!(roster.participants, vec!["Zed"]);
        assert_eq!(roster.topics, Roster::sample().topics);

        apply_overrides(&mut roster, Vec::new(), vec![Topic::new("Solo", 1)]);
        assert_eq!(roster.topics, vec![Topic::new("Solo", 1)]);
    }
}
