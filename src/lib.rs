//! Weekly meeting planning over a CSV availability grid.
//!
//! The grid has one row per 15-minute slot (labelled
//! `"<Weekday> <H>:<MM>:<SS> <AM|PM>"`) and one `0`/`1` column per person.
//! A [`Planner`](schedule::Planner) finds the first slot where everyone is
//! free for a full window, then greedily assigns each remaining person a
//! 1-on-1 with the head person, consuming each slot at most once.
//!
//! ```
//! use wochenplan::input::AvailabilityTable;
//! use wochenplan::schedule::Planner;
//!
//! let csv = "\
//! Time,Ada,Grace
//! Monday 9:00:00 AM,1,1
//! Monday 9:15:00 AM,1,1
//! Monday 9:30:00 AM,1,1
//! ";
//!
//! let table = AvailabilityTable::from_reader(csv.as_bytes()).unwrap();
//! let plan = Planner::new(table, 1).plan("Ada").unwrap();
//!
//! assert_eq!(
//!     plan.render_lines(),
//!     vec![
//!         "Best General Meeting Time: Monday, 9:00 AM",
//!         "1-on-1 Meeting Time: Monday, 9:15 AM with Grace",
//!     ]
//! );
//! ```

pub mod input;
pub mod meeting;
pub mod schedule;
pub mod time;
