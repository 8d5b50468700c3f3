use chrono::{NaiveTime, Timelike, Weekday};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("time label '{0}' is not of the form '<Weekday> <H>:<MM>:<SS> <AM|PM>'")]
    BadLabel(String),
    #[error("'{0}' is not a weekday name")]
    BadWeekday(String),
    #[error("'{0}' is not a 12-hour clock time")]
    BadClock(String),
}

/// One 15-minute slot in the weekly grid.
///
/// Parsed from the fixed label format `"<Weekday> <H>:<MM>:<SS> <AM|PM>"`,
/// rendered back as `"<Day>, <H>:<MM> <AM|PM>"`.
///
/// # Examples
/// ```
/// use wochenplan::time::SlotTime;
///
/// let slot: SlotTime = "Monday 9:00:00 AM".parse().unwrap();
///
/// assert_eq!(slot.hour, 9);
/// assert_eq!(slot.minute, 0);
/// assert_eq!(slot.to_string(), "Monday, 9:00 AM");
/// ```
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(into = "String")]
pub struct SlotTime {
    pub weekday: Weekday,
    /// 24-hour clock, 0-23.
    pub hour: u32,
    pub minute: u32,
}

impl SlotTime {
    /// # Examples
    /// ```
    /// use chrono::Weekday;
    /// use wochenplan::time::SlotTime;
    ///
    /// let slot = SlotTime::new(Weekday::Wed, 13, 30);
    /// assert_eq!(slot.to_string(), "Wednesday, 1:30 PM");
    ///
    /// let midnight = SlotTime::new(Weekday::Sun, 0, 0);
    /// assert_eq!(midnight.to_string(), "Sunday, 12:00 AM");
    /// ```
    pub fn new(weekday: Weekday, hour: u32, minute: u32) -> SlotTime {
        SlotTime {
            weekday,
            hour,
            minute,
        }
    }

    /// Whether `self` is the immediate 15-minute successor of `prev` on the
    /// wall clock: same hour with the minute bumped by 15, or the top of the
    /// next hour right after a `:45`.
    ///
    /// # Examples
    /// ```
    /// use chrono::Weekday;
    /// use wochenplan::time::SlotTime;
    ///
    /// let a = SlotTime::new(Weekday::Mon, 9, 30);
    /// let b = SlotTime::new(Weekday::Mon, 9, 45);
    /// let c = SlotTime::new(Weekday::Mon, 10, 0);
    ///
    /// assert!(b.follows(&a));
    /// assert!(c.follows(&b));
    /// assert!(!c.follows(&a));
    /// assert!(!a.follows(&b));
    /// ```
    pub fn follows(&self, prev: &SlotTime) -> bool {
        (self.hour == prev.hour && self.minute == prev.minute + 15)
            || (self.hour == prev.hour + 1 && self.minute == 0 && prev.minute == 45)
    }
}

impl FromStr for SlotTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, clock) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| TimeParseError::BadLabel(s.to_string()))?;

        let weekday =
            Weekday::from_str(day).map_err(|_| TimeParseError::BadWeekday(day.to_string()))?;

        let time = NaiveTime::parse_from_str(clock.trim(), "%I:%M:%S %p")
            .map_err(|_| TimeParseError::BadClock(clock.trim().to_string()))?;

        Ok(SlotTime {
            weekday,
            hour: time.hour(),
            minute: time.minute(),
        })
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        let period = if self.hour < 12 { "AM" } else { "PM" };

        write!(
            f,
            "{}, {}:{:02} {}",
            day_name(self.weekday),
            hour,
            self.minute,
            period
        )
    }
}

impl From<SlotTime> for String {
    fn from(slot: SlotTime) -> String {
        slot.to_string()
    }
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
