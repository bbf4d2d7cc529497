//! Error types for roster editing and parsing.

use thiserror::Error;

/// Errors that can occur while editing or parsing a roster.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// No participant exists at the given index. Rendered as a 1-based row.
    #[error("no participant at row {} (roster has {len})", index + 1)]
    ParticipantIndex { index: usize, len: usize },

    /// No topic exists at the given index. Rendered as a 1-based row.
    #[error("no topic at row {} (roster has {len})", index + 1)]
    TopicIndex { index: usize, len: usize },

    /// A topic spec was not in `NAME=COUNT` form.
    #[error("invalid topic spec '{0}': expected NAME=COUNT")]
    InvalidTopicSpec(String),
}

impl RosterError {
    /// Returns true if this error refers to a row that does not exist.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            RosterError::ParticipantIndex { .. } | RosterError::TopicIndex { .. }
        )
    }
}
