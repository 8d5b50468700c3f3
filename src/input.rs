use crate::time::{SlotTime, TimeParseError};
use csv::Reader;
use itertools::Itertools;
use log::{debug, trace};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Time(#[from] TimeParseError),
    #[error("header row lists no people")]
    NoPeople,
}

/// The loaded weekly grid: one row per 15-minute slot, one column per
/// person, in file order. A flag is free only when the cell reads `1`.
#[derive(Clone, Debug)]
pub struct AvailabilityTable {
    people: Vec<String>,
    slots: Vec<SlotTime>,
    flags: Vec<Vec<bool>>,
}

impl AvailabilityTable {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        Self::load(Reader::from_path(path)?)
    }

    /// # Examples
    /// ```
    /// use wochenplan::input::AvailabilityTable;
    ///
    /// let csv = "\
    /// Time,Ada,Grace
    /// Monday 9:00:00 AM,1,1
    /// Monday 9:15:00 AM,0,1
    /// ";
    ///
    /// let table = AvailabilityTable::from_reader(csv.as_bytes()).unwrap();
    ///
    /// assert_eq!(table.people(), ["Ada", "Grace"]);
    /// assert_eq!(table.len(), 2);
    /// assert!(!table.is_free(1, 0));
    /// assert!(table.is_free(1, 1));
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        Self::load(Reader::from_reader(reader))
    }

    fn load<R: Read>(mut reader: Reader<R>) -> Result<Self, InputError> {
        let people: Vec<String> = reader
            .headers()?
            .iter()
            .skip(1)
            .map(|name| name.trim().to_string())
            .collect();

        if people.is_empty() {
            return Err(InputError::NoPeople);
        }

        let mut slots = Vec::new();
        let mut flags = Vec::new();

        for record in reader.records() {
            let record = record?;
            let slot: SlotTime = record[0].parse()?;
            trace!("slot {} of {}", slots.len(), slot);

            slots.push(slot);
            flags.push(record.iter().skip(1).map(|cell| cell.trim() == "1").collect());
        }

        debug!("loaded {} slots for {}", slots.len(), people.iter().join(", "));

        Ok(AvailabilityTable {
            people,
            slots,
            flags,
        })
    }

    /// Column names, in header order.
    pub fn people(&self) -> &[String] {
        &self.people
    }

    /// Slot times, in file row order. No chronological sort is applied.
    pub fn slots(&self) -> &[SlotTime] {
        &self.slots
    }

    /// Number of slot rows.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_free(&self, slot: usize, person: usize) -> bool {
        self.flags[slot][person]
    }

    /// Marks every person busy for the given slot row.
    pub(crate) fn clear_slot(&mut self, slot: usize) {
        for flag in &mut self.flags[slot] {
            *flag = false;
        }
    }
}
