use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ValidationError;

/// Wall-clock time as minutes since midnight, always in `[0, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const DEFAULT_SLOT_START: TimeOfDay = TimeOfDay(9 * 60);
    pub const DEFAULT_SLOT_END: TimeOfDay = TimeOfDay(12 * 60);

    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, ValidationError> {
        if hour > 23 || minute > 59 {
            return Err(ValidationError::MalformedTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self(hour * 60 + minute))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

fn parse_two_digits(part: &str, max: u16) -> Option<u16> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok().filter(|v| *v <= max)
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    /// Accepts `HH:MM`, and `HH:MM:SS` as the backend serialises time fields.
    /// Seconds are checked and then dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MalformedTime(s.to_string());

        let parts: Vec<&str> = s.trim().split(':').collect();
        let (hour, minute) = match parts.as_slice() {
            [h, m] => (h, m),
            [h, m, sec] => {
                parse_two_digits(sec, 59).ok_or_else(malformed)?;
                (h, m)
            }
            _ => return Err(malformed()),
        };

        let hour = parse_two_digits(hour, 23).ok_or_else(malformed)?;
        let minute = parse_two_digits(minute, 59).ok_or_else(malformed)?;
        Ok(Self(hour * 60 + minute))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
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
        s.parse().map_err(serde::de::Error::custom)
    }
}

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Backend weekday numbering: 0 = Monday .. 6 = Sunday.
pub fn weekday_from_index(index: i64) -> Result<Weekday, ValidationError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| WEEKDAYS.get(i).copied())
        .ok_or(ValidationError::InvalidWeekday(index))
}

pub fn weekday_to_index(day: Weekday) -> u8 {
    day.num_days_from_monday() as u8
}

/// `#[serde(with = "weekday_index")]` for fields carried as 0 = Monday integers.
pub mod weekday_index {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(super::weekday_to_index(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let index = i64::deserialize(deserializer)?;
        super::weekday_from_index(index).map_err(serde::de::Error::custom)
    }
}
