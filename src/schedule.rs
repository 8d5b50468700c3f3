use crate::input::AvailabilityTable;
use crate::meeting::{MeetingPlan, OneOnOne};
use itertools::Itertools;
use log::{debug, info};
use std::collections::HashSet;
use thiserror::Error;

/// Four 15-minute slots, one hour.
pub const DEFAULT_INTERVAL: usize = 4;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("'{0}' does not match any person column in the table")]
    UnknownPerson(String),
}

/// Single-pass planner over a loaded table.
///
/// `interval` is the number of consecutive 15-minute slots a meeting
/// occupies. Planning is deterministic: the general meeting is picked
/// first, its slot row is cleared, and only then are 1-on-1s matched
/// greedily in person column order, so no 1-on-1 can land on the general
/// slot and earlier people get first pick.
pub struct Planner {
    table: AvailabilityTable,
    interval: usize,
}

impl Planner {
    pub fn new(table: AvailabilityTable, interval: usize) -> Planner {
        Planner { table, interval }
    }

    /// Per slot row, the people (as column indices, ascending) free for a
    /// full `interval`-slot window starting there.
    ///
    /// A person is free starting at row `t` iff every offset `i` in
    /// `0..interval` stays under the reserved tail margin
    /// (`t + i < len - interval`), carries a free flag, and for `i > 0` is
    /// the wall-clock successor of the previous row. The margin is applied
    /// at every offset, so the last `interval` rows never start a window
    /// even when they would fit in the file.
    pub fn window_starts(&self) -> Vec<Vec<usize>> {
        let slots = self.table.slots();
        let margin = slots.len().saturating_sub(self.interval);

        (0..slots.len())
            .map(|t| {
                (0..self.table.people().len())
                    .filter(|&p| {
                        (0..self.interval).all(|i| {
                            t + i < margin
                                && self.table.is_free(t + i, p)
                                && (i == 0 || slots[t + i].follows(&slots[t + i - 1]))
                        })
                    })
                    .collect()
            })
            .collect()
    }

    fn general_slot(&self, starts: &[Vec<usize>]) -> Option<usize> {
        let everyone = self.table.people().len();
        starts.iter().position(|free| free.len() == everyone)
    }

    /// Computes the full plan for the given head person.
    ///
    /// The matcher is greedy first-fit: for each non-head person in column
    /// order, the first unused row (in table order) where both the head and
    /// that person have a window is taken and consumed. No backtracking; a
    /// person left without a candidate becomes an
    /// [`OneOnOne::Unmatched`](crate::meeting::OneOnOne) entry rather than
    /// an error.
    pub fn plan(mut self, head: &str) -> Result<MeetingPlan, ScheduleError> {
        let (head_idx, _) = self
            .table
            .people()
            .iter()
            .find_position(|person| person.as_str() == head)
            .ok_or_else(|| ScheduleError::UnknownPerson(head.to_string()))?;

        let general = self.general_slot(&self.window_starts());

        if let Some(t) = general {
            info!("general meeting at {}", self.table.slots()[t]);
            self.table.clear_slot(t);
        }

        // Window sets are rebuilt after the general slot is cleared;
        // windows crossing that row dissolve for everyone.
        let starts = self.window_starts();

        let mut used: HashSet<usize> = HashSet::new();
        let mut one_on_ones = Vec::with_capacity(self.table.people().len().saturating_sub(1));

        for (p, person) in self.table.people().iter().enumerate() {
            if p == head_idx {
                continue;
            }

            let slot = (0..starts.len()).find(|t| {
                !used.contains(t) && starts[*t].contains(&head_idx) && starts[*t].contains(&p)
            });

            match slot {
                Some(t) => {
                    used.insert(t);
                    debug!("1-on-1 with {} at {}", person, self.table.slots()[t]);
                    one_on_ones.push(OneOnOne::Scheduled {
                        slot: self.table.slots()[t],
                        person: person.clone(),
                    });
                }
                None => {
                    debug!("no suitable 1-on-1 slot for {}", person);
                    one_on_ones.push(OneOnOne::Unmatched {
                        person: person.clone(),
                        head: head.to_string(),
                    });
                }
            }
        }

        Ok(MeetingPlan {
            general: general.map(|t| self.table.slots()[t]),
            one_on_ones,
        })
    }
}
