//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};
use topicdraw_engine::{Assignment, Outcome, Roster, TopicAssignment};

const CLI_SCHEMA_VERSION: &str = "topicdraw.cli.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text and tables.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// Print an assignment: one line per topic, names coloured by round.
pub fn print_assignment(assignment: &Assignment, format: OutputFormat, hue_step: u16) {
    match format {
        OutputFormat::Table => {
            if assignment.topics().is_empty() {
                println!("{}", "No topics.".dimmed());
                return;
            }
            for topic in assignment.topics() {
                println!("{}", topic_line(topic, hue_step));
            }
            for topic in assignment.insufficient() {
                if let Outcome::Insufficient { missing } = topic.outcome {
                    print_warning(&format!(
                        "'{}' is short {} participant(s); the participant list is empty",
                        topic.topic, missing
                    ));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", format_json(&assignment_value(assignment, hue_step)));
        }
    }
}

/// `Topic: a, b, c` with each name in its round colour.
pub fn topic_line(topic: &TopicAssignment, hue_step: u16) -> String {
    let names = if topic.slots.is_empty() {
        "-".dimmed().to_string()
    } else {
        topic
            .slots
            .iter()
            .map(|slot| {
                let (r, g, b) = slot.color(hue_step).to_rgb();
                slot.participant.truecolor(r, g, b).to_string()
            })
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{}: {}", topic.topic.bold(), names)
}

#[derive(Debug, Serialize)]
struct SlotView<'a> {
    participant: &'a str,
    round: u32,
    color: String,
}

#[derive(Debug, Serialize)]
struct TopicView<'a> {
    topic: &'a str,
    required: usize,
    #[serde(flatten)]
    outcome: Outcome,
    slots: Vec<SlotView<'a>>,
}

#[derive(Debug, Serialize)]
struct AssignmentView<'a> {
    rounds: u32,
    topics: Vec<TopicView<'a>>,
}

pub fn assignment_value(assignment: &Assignment, hue_step: u16) -> serde_json::Value {
    let view = AssignmentView {
        rounds: assignment.rounds(),
        topics: assignment
            .topics()
            .iter()
            .map(|topic| TopicView {
                topic: &topic.topic,
                required: topic.required,
                outcome: topic.outcome,
                slots: topic
                    .slots
                    .iter()
                    .map(|slot| SlotView {
                        participant: &slot.participant,
                        round: slot.round,
                        color: slot.color(hue_step).to_string(),
                    })
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_value(view).unwrap_or_else(|_| serde_json::json!({}))
}

#[derive(Debug, Tabled)]
struct ParticipantRow<'a> {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Participant")]
    name: &'a str,
}

#[derive(Debug, Tabled)]
struct TopicRow<'a> {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Topic")]
    name: &'a str,
    #[tabled(rename = "Required")]
    required: usize,
}

/// Print the roster. Row numbers are 1-based, matching the shell commands.
pub fn print_roster(roster: &Roster, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if roster.participants.is_empty() {
                println!("{}", "No participants.".dimmed());
            } else {
                let rows = roster
                    .participants
                    .iter()
                    .enumerate()
                    .map(|(i, name)| ParticipantRow {
                        index: i + 1,
                        name: name.as_str(),
                    });
                println!("{}", Table::new(rows));
            }

            if roster.topics.is_empty() {
                println!("{}", "No topics.".dimmed());
            } else {
                let rows = roster.topics.iter().enumerate().map(|(i, t)| TopicRow {
                    index: i + 1,
                    name: t.name.as_str(),
                    required: t.required,
                });
                println!("{}", Table::new(rows));
            }

            println!("{}", roster_summary(roster).dimmed());
        }
        OutputFormat::Json => {
            let value = serde_json::to_value(roster).unwrap_or_else(|_| serde_json::json!({}));
            println!("{}", format_json(&value));
        }
    }
}

/// e.g. `9 slots from 3 participants (3 rounds)`.
pub fn roster_summary(roster: &Roster) -> String {
    let demand = roster.demand();
    let pool = roster.participants.len();
    let rounds = if pool == 0 { 0 } else { demand.div_ceil(pool) };
    format!("{demand} slots from {pool} participants ({rounds} rounds)")
}

/// Acknowledge an edit: a success line, or `{ok, message}` as JSON.
pub fn print_done(message: &str, format: OutputFormat) {
    match format {
        OutputFormat::Table => print_success(message),
        OutputFormat::Json => println!("{}", done_json(message)),
    }
}

fn done_json(message: &str) -> String {
    format_json(&serde_json::json!({ "ok": true, "message": message }))
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "Info:".blue().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}

fn format_json(value: &serde_json::Value) -> String {
    let wrapped = serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    });
    let sorted = sort_json_value(wrapped);
    serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| "{}".to_string())
}

fn sort_json_value(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Array(values) => {
            serde_json::Value::Array(values.into_iter().map(sort_json_value).collect())
        }
        serde_json::Value::Object(entries) => {
            let mut pairs: Vec<_> = entries.into_iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            let mut mapped = serde_json::Map::new();
            for (key, value) in pairs {
                mapped.insert(key, sort_json_value(value));
            }
            serde_json::Value::Object(mapped)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topicdraw_engine::{assign_with_order, Topic};

    fn sample_assignment() -> Assignment {
        let base = vec!["Bob".to_string(), "Alice".to_string()];
        assign_with_order(&base, &[Topic::new("T1", 3), Topic::new("T2", 0)])
    }

    #[test]
    fn assignment_value_tags_rounds_and_colors() {
        let value = assignment_value(&sample_assignment(), 40);
        let expected = serde_json::json!({
            "rounds": 2,
            "topics": [
                {
                    "topic": "T1",
                    "required": 3,
                    "status": "complete",
                    "slots": [
                        { "participant": "Bob", "round": 0, "color": "hsl(0, 100%, 50%)" },
                        { "participant": "Alice", "round": 0, "color": "hsl(0, 100%, 50%)" },
                        { "participant": "Bob", "round": 1, "color": "hsl(40, 100%, 50%)" }
                    ]
                },
                { "topic": "T2", "required": 0, "status": "complete", "slots": [] }
            ]
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn assignment_value_reports_missing() {
        let assignment = assign_with_order(&[], &[Topic::new("T1", 2)]);
        let value = assignment_value(&assignment, 40);
        assert_eq!(value["topics"][0]["status"], "insufficient");
        assert_eq!(value["topics"][0]["missing"], 2);
        assert_eq!(value["rounds"], 0);
    }

    #[test]
    fn topic_line_lists_names_in_order() {
        colored::control::set_override(false);
        let assignment = sample_assignment();
        assert_eq!(topic_line(&assignment.topics()[0], 40), "T1: Bob, Alice, Bob");
        assert_eq!(topic_line(&assignment.topics()[1], 40), "T2: -");
    }

    #[test]
    fn format_json_wraps_and_sorts() {
        let out = format_json(&serde_json::json!({ "b": 1, "a": 2 }));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["schemaVersion"], CLI_SCHEMA_VERSION);
        assert_eq!(parsed["data"]["a"], 2);
        assert!(out.find("\"a\"").unwrap() < out.find("\"b\"").unwrap());
    }

    #[test]
    fn done_json_carries_schema_version() {
        let parsed: serde_json::Value =
            serde_json::from_str(&done_json("Removed topic 'Lab'")).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "schemaVersion": CLI_SCHEMA_VERSION,
                "data": { "ok": true, "message": "Removed topic 'Lab'" }
            })
        );
    }

    #[test]
    fn roster_summary_counts_rounds() {
        assert_eq!(
            roster_summary(&Roster::sample()),
            "9 slots from 3 participants (3 rounds)"
        );
        assert_eq!(
            roster_summary(&Roster::new()),
            "0 slots from 0 participants (0 rounds)"
        );
    }
}
