//! 24-hour wall-clock times.
//!
//! Times are normalized to zero-padded `HH:MM` before storage or comparison,
//! so the derived ordering matches lexicographic comparison of the stored
//! strings.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{UpliftError, UpliftResult};

/// Morning/afternoon marker for 12-hour clock input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// A time of day on the 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> UpliftResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(UpliftError::InvalidTimeFormat(format!("{hour}:{minute:02}")));
        }
        Ok(TimeOfDay { hour, minute })
    }

    /// Convert a 12-hour clock reading to 24-hour time.
    ///
    /// `12:xx am` is midnight (`00:xx`), `12:xx pm` stays `12:xx`, other pm
    /// hours add 12.
    pub fn from_12h(hour: u8, minute: u8, meridiem: Meridiem) -> UpliftResult<Self> {
        if hour == 0 || hour > 12 {
            return Err(UpliftError::InvalidTimeFormat(format!(
                "{hour}:{minute:02} is not a 12-hour clock time"
            )));
        }
        let hour = match (meridiem, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        TimeOfDay::new(hour, minute)
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn to_naive(self) -> NaiveTime {
        // unwrap safe: hour/minute are validated in new()
        NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, 0).unwrap()
    }
}

impl FromStr for TimeOfDay {
    type Err = UpliftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || UpliftError::InvalidTimeFormat(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        TimeOfDay::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
