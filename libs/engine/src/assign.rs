//! The assignment pass.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::palette::Hsl;
use crate::roster::Topic;
use crate::shuffle::Shuffle;

/// One participant placed in a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Participant display name.
    pub participant: String,

    /// How many times the pool had wrapped when this slot was drawn.
    pub round: u32,
}

impl Slot {
    /// Display colour for this slot's round.
    pub fn color(&self, hue_step: u16) -> Hsl {
        Hsl::round_color(self.round, hue_step)
    }
}

/// Whether a topic got everything it asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// `slots.len() == required`.
    Complete,

    /// The pool was empty, so `missing` slots could not be filled.
    Insufficient { missing: usize },
}

/// Participants drawn for a single topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicAssignment {
    pub topic: String,
    pub required: usize,
    pub slots: Vec<Slot>,
    pub outcome: Outcome,
}

impl TopicAssignment {
    /// Returns true if the topic received its full demand.
    pub fn is_complete(&self) -> bool {
        matches!(self.outcome, Outcome::Complete)
    }

    /// Participant names in draw order.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.participant.as_str())
    }
}

/// Result of one run, topics in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    topics: Vec<TopicAssignment>,
}

impl Assignment {
    /// Per-topic results in input order.
    pub fn topics(&self) -> &[TopicAssignment] {
        &self.topics
    }

    /// First topic with the given name. Names are not required to be unique.
    pub fn get(&self, name: &str) -> Option<&TopicAssignment> {
        self.topics.iter().find(|t| t.topic == name)
    }

    /// Returns true if every topic received its full demand.
    pub fn is_complete(&self) -> bool {
        self.topics.iter().all(TopicAssignment::is_complete)
    }

    /// Topics that could not be filled.
    pub fn insufficient(&self) -> impl Iterator<Item = &TopicAssignment> {
        self.topics.iter().filter(|t| !t.is_complete())
    }

    /// Number of distinct rounds drawn from (0 when nothing was assigned).
    pub fn rounds(&self) -> u32 {
        self.topics
            .iter()
            .flat_map(|t| t.slots.iter())
            .map(|slot| slot.round + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Shuffle `participants` and distribute them over `topics`.
pub fn assign<S: Shuffle + ?Sized>(
    participants: &[String],
    topics: &[Topic],
    shuffle: &mut S,
) -> Assignment {
    let mut base = participants.to_vec();
    shuffle.shuffle(&mut base);
    assign_with_order(&base, topics)
}

/// Distribute an already-permuted `base` over `topics`.
///
/// Topics take contiguous runs from a cursor over `base`. When the cursor
/// reaches the end it restarts at 0 and the round increments; the cursor and
/// round carry over between topics.
pub fn assign_with_order(base: &[String], topics: &[Topic]) -> Assignment {
    let mut pool = Pool::new(base);
    let mut out = Vec::with_capacity(topics.len());

    for topic in topics {
        let mut slots = Vec::new();
        let outcome = loop {
            let remaining = topic.required - slots.len();
            if remaining == 0 {
                break Outcome::Complete;
            }
            let Some((chunk, round)) = pool.take(remaining) else {
                warn!(topic = %topic.name, missing = remaining, "participant pool is empty");
                break Outcome::Insufficient { missing: remaining };
            };
            slots.extend(chunk.iter().map(|participant| Slot {
                participant: participant.clone(),
                round,
            }));
        };

        out.push(TopicAssignment {
            topic: topic.name.clone(),
            required: topic.required,
            slots,
            outcome,
        });
    }

    debug!(
        participants = base.len(),
        topics = topics.len(),
        last_round = pool.round,
        "assignment pass finished"
    );

    Assignment { topics: out }
}

/// Read cursor over the base permutation.
struct Pool<'a> {
    base: &'a [String],
    cursor: usize,
    round: u32,
}

impl<'a> Pool<'a> {
    fn new(base: &'a [String]) -> Self {
        Self {
            base,
            cursor: 0,
            round: 0,
        }
    }

    /// Take up to `wanted` entries without crossing the end of the base
    /// order, refilling first if it is exhausted. `None` if the base is empty.
    fn take(&mut self, wanted: usize) -> Option<(&'a [String], u32)> {
        if self.base.is_empty() {
            return None;
        }
        if self.cursor == self.base.len() {
            self.cursor = 0;
            self.round = self.round.saturating_add(1);
        }
        let end = self.cursor + wanted.min(self.base.len() - self.cursor);
        let chunk = &self.base[self.cursor..end];
        self.cursor = end;
        Some((chunk, self.round))
    }
}
