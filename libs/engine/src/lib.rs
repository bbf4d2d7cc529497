//! # topicdraw-engine
//!
//! Randomized assignment of a participant pool to a list of topics.
//!
//! ## Model
//!
//! - A **roster** holds the participants (plain display strings, duplicates
//!   allowed) and the topics, each asking for a number of participants.
//! - A run shuffles the participants once into the **base permutation** and
//!   then hands them out to the topics in order.
//! - When demand outruns the pool, the base permutation is reused from the
//!   start (**wrap-around**) and the **round** counter goes up. Every slot is
//!   tagged with the round it was drawn in so renderers can colour it.
//!
//! ## Invariants
//!
//! - The base permutation is computed once per run and never reshuffled
//! - Topics are served strictly in input order
//! - A topic with positive demand and an empty pool is reported as
//!   insufficient instead of looping forever
//! - Given a fixed [`Shuffle`], [`assign`] is a pure function

mod assign;
mod error;
mod palette;
mod roster;
mod shuffle;

pub use assign::{assign, assign_with_order, Assignment, Outcome, Slot, TopicAssignment};
pub use error::RosterError;
pub use palette::{round_hue, round_hue_with_step, Hsl, HUE_STEP};
pub use roster::{parse_required_count, Roster, Topic};
pub use shuffle::{fisher_yates, FisherYates, Shuffle};
