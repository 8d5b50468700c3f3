use crate::time::SlotTime;
use serde::Serialize;
use std::fmt;

/// Outcome of pairing one person with the head for a 1-on-1.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum OneOnOne {
    Scheduled { slot: SlotTime, person: String },
    Unmatched { person: String, head: String },
}

impl fmt::Display for OneOnOne {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OneOnOne::Scheduled { slot, person } => {
                write!(f, "1-on-1 Meeting Time: {} with {}", slot, person)
            }
            OneOnOne::Unmatched { person, head } => {
                write!(
                    f,
                    "1-on-1 Meeting: No suitable time found for {} with {}",
                    person, head
                )
            }
        }
    }
}

/// Everything one planning pass produces.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MeetingPlan {
    /// First slot in table order where everyone is free for a full window.
    pub general: Option<SlotTime>,
    /// One entry per non-head person, in column order.
    pub one_on_ones: Vec<OneOnOne>,
}

impl MeetingPlan {
    /// Output lines in print order: the general meeting first when one
    /// exists, then each 1-on-1 in person column order.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(1 + self.one_on_ones.len());

        if let Some(slot) = &self.general {
            lines.push(format!("Best General Meeting Time: {}", slot));
        }

        lines.extend(self.one_on_ones.iter().map(|meeting| meeting.to_string()));
        lines
    }
}
