//! Editable participant and topic lists.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assign::{assign, Assignment};
use crate::error::RosterError;
use crate::shuffle::Shuffle;

/// A topic and how many participants it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,

    #[serde(default)]
    pub required: usize,
}

impl Topic {
    pub fn new(name: impl Into<String>, required: usize) -> Self {
        Self {
            name: name.into(),
            required,
        }
    }
}

/// Parses `NAME=COUNT`. The count goes through [`parse_required_count`], so
/// `lab=abc` is a topic requiring nobody.
impl FromStr for Topic {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, count)) = s.rsplit_once('=') else {
            return Err(RosterError::InvalidTopicSpec(s.to_string()));
        };
        Ok(Self::new(name.trim(), parse_required_count(count)))
    }
}

/// Sanitize free-text count input: non-numeric and negative values become 0.
pub fn parse_required_count(input: &str) -> usize {
    input.trim().parse().unwrap_or(0)
}

/// The participant and topic lists a run is drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub participants: Vec<String>,

    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Roster {
    /// Empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starter roster: three people and four topics.
    pub fn sample() -> Self {
        Self {
            participants: vec!["Alice".into(), "Bob".into(), "Charlie".into()],
            topics: vec![
                Topic::new("Topic 1", 2),
                Topic::new("Topic 2", 2),
                Topic::new("Topic 3", 3),
                Topic::new("Topic 4", 2),
            ],
        }
    }

    /// Total number of slots requested across all topics.
    pub fn demand(&self) -> usize {
        self.topics.iter().map(|t| t.required).sum()
    }

    pub fn add_participant(&mut self, name: impl Into<String>) {
        self.participants.push(name.into());
    }

    pub fn remove_participant(&mut self, index: usize) -> Result<String, RosterError> {
        self.check_participant(index)?;
        Ok(self.participants.remove(index))
    }

    pub fn rename_participant(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), RosterError> {
        self.check_participant(index)?;
        self.participants[index] = name.into();
        Ok(())
    }

    pub fn add_topic(&mut self, name: impl Into<String>, required: usize) {
        self.topics.push(Topic::new(name, required));
    }

    pub fn remove_topic(&mut self, index: usize) -> Result<Topic, RosterError> {
        self.check_topic(index)?;
        Ok(self.topics.remove(index))
    }

    pub fn rename_topic(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), RosterError> {
        self.check_topic(index)?;
        self.topics[index].name = name.into();
        Ok(())
    }

    pub fn set_required(&mut self, index: usize, required: usize) -> Result<(), RosterError> {
        self.check_topic(index)?;
        self.topics[index].required = required;
        Ok(())
    }

    /// Run one assignment pass over the current lists.
    pub fn assign<S: Shuffle + ?Sized>(&self, shuffle: &mut S) -> Assignment {
        assign(&self.participants, &self.topics, shuffle)
    }

    fn check_participant(&self, index: usize) -> Result<(), RosterError> {
        if index < self.participants.len() {
            Ok(())
        } else {
            Err(RosterError::ParticipantIndex {
                index,
                len: self.participants.len(),
            })
        }
    }

    fn check_topic(&self, index: usize) -> Result<(), RosterError> {
        if index < self.topics.len() {
            Ok(())
        } else {
            Err(RosterError::TopicIndex {
                index,
                len: self.topics.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_count() {
        assert_eq!(parse_required_count("3"), 3);
        assert_eq!(parse_required_count(" 12 "), 12);
        assert_eq!(parse_required_count("-2"), 0);
        assert_eq!(parse_required_count("abc"), 0);
        assert_eq!(parse_required_count(""), 0);
    }

    #[test]
    fn test_topic_from_str() {
        assert_eq!("Lab=3".parse::<Topic>().unwrap(), Topic::new("Lab", 3));
        assert_eq!("a=b=2".parse::<Topic>().unwrap(), Topic::new("a=b", 2));
        assert_eq!("Lab=-1".parse::<Topic>().unwrap(), Topic::new("Lab", 0));
        assert_eq!(
            "Lab".parse::<Topic>().unwrap_err(),
            RosterError::InvalidTopicSpec("Lab".to_string())
        );
    }

    #[test]
    fn test_sample_roster() {
        let roster = Roster::sample();
        assert_eq!(roster.participants.len(), 3);
        assert_eq!(roster.topics.len(), 4);
        assert_eq!(roster.demand(), 9);
    }

    #[test]
    fn test_edit_participants() {
        let mut roster = Roster::new();
        roster.add_participant("Alice");
        roster.add_participant("");
        roster.rename_participant(1, "Bob").unwrap();
        assert_eq!(roster.participants, vec!["Alice", "Bob"]);

        assert_eq!(roster.remove_participant(0).unwrap(), "Alice");
        assert_eq!(roster.participants, vec!["Bob"]);

        let err = roster.remove_participant(5).unwrap_err();
        assert_eq!(err, RosterError::ParticipantIndex { index: 5, len: 1 });
        assert!(err.is_index_error());
    }

    #[test]
    fn test_edit_topics() {
        let mut roster = Roster::new();
        roster.add_topic("", 0);
        roster.rename_topic(0, "Design").unwrap();
        roster.set_required(0, 4).unwrap();
        assert_eq!(roster.topics, vec![Topic::new("Design", 4)]);

        assert!(roster.set_required(1, 1).is_err());
        assert_eq!(roster.remove_topic(0).unwrap(), Topic::new("Design", 4));
        assert!(roster.topics.is_empty());
    }

    #[test]
    fn test_topic_required_defaults_to_zero() {
        let topic: Topic = serde_json::from_str(r#"{"name":"Open"}"#).unwrap();
        assert_eq!(topic, Topic::new("Open", 0));
    }
}
