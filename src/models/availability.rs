use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time::{weekday_index, TimeOfDay, WEEKDAYS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeSlot {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Half-open intersection: slots that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn is_ordered(&self) -> bool {
        self.start < self.end
    }
}

impl Default for TimeSlot {
    /// 09:00-12:00, the slot a freshly added row starts with.
    fn default() -> Self {
        Self {
            start: TimeOfDay::DEFAULT_SLOT_START,
            end: TimeOfDay::DEFAULT_SLOT_END,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotField {
    Start,
    End,
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Slots for one weekday, in insertion order. Empty means unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayAvailability {
    pub slots: Vec<TimeSlot>,
}

impl DayAvailability {
    pub fn is_available(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Header text for the day editor.
    pub fn summary(&self) -> String {
        match (self.slots.first(), self.slots.last()) {
            (Some(first), Some(last)) => format!("{} - {}", first.start, last.end),
            _ => "Unavailable".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekId(Uuid);

impl WeekId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WeekId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One Monday..Sunday block of day editors.
#[derive(Debug, Clone)]
pub struct Week {
    pub id: WeekId,
    pub name: String,
    pub days: [DayAvailability; 7],
}

impl Week {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            id: WeekId::new(),
            name: name.into(),
            days: Default::default(),
        }
    }

    pub fn with_default_slots(name: impl Into<String>) -> Self {
        let mut week = Self::empty(name);
        for day in week.days.iter_mut() {
            day.slots.push(TimeSlot::default());
        }
        week
    }

    pub fn day(&self, day: Weekday) -> &DayAvailability {
        &self.days[day.num_days_from_monday() as usize]
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DayAvailability {
        &mut self.days[day.num_days_from_monday() as usize]
    }

    pub fn iter_days(&self) -> impl Iterator<Item = (Weekday, &DayAvailability)> {
        WEEKDAYS.iter().copied().zip(self.days.iter())
    }

    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|d| d.slots.len()).sum()
    }
}

/// One row of the flat weekly-availability list the backend exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySlot {
    #[serde(with = "weekday_index")]
    pub weekday: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}
