use std::collections::HashSet;

use chrono::Weekday;

use crate::errors::{AppError, Result, ValidationError};
use crate::models::{DayAvailability, SlotField, TimeOfDay, TimeSlot, Week, WeekId, WeeklySlot};
use crate::services::overlap::{detect_week_overlaps, WeekConflicts};

/// In-memory weekly availability for one editing session.
///
/// Mutations never recompute conflicts; call [`AvailabilityEditor::detect_overlaps`]
/// after each edit.
#[derive(Debug, Clone)]
pub struct AvailabilityEditor {
    weeks: Vec<Week>,
}

impl Default for AvailabilityEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilityEditor {
    /// One week with a 09:00-12:00 slot on every day.
    pub fn new() -> Self {
        Self {
            weeks: vec![Week::with_default_slots("Week 1")],
        }
    }

    /// Groups the backend's flat list into a single week, keeping response order.
    pub fn from_slots(slots: &[WeeklySlot]) -> Self {
        let mut week = Week::empty("Week 1");
        for row in slots.iter().filter(|r| r.is_available) {
            week.day_mut(row.weekday)
                .slots
                .push(TimeSlot::new(row.start_time, row.end_time));
        }
        tracing::debug!(slots = week.slot_count(), "loaded weekly availability");
        Self { weeks: vec![week] }
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn week(&self, id: WeekId) -> Result<&Week> {
        self.weeks
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| AppError::NotFound(format!("week {id}")))
    }

    fn week_mut(&mut self, id: WeekId) -> Result<&mut Week> {
        self.weeks
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| AppError::NotFound(format!("week {id}")))
    }

    fn day_mut(&mut self, id: WeekId, day: Weekday) -> Result<&mut DayAvailability> {
        Ok(self.week_mut(id)?.day_mut(day))
    }

    pub fn add_week(&mut self) -> WeekId {
        let week = Week::empty(format!("Week {}", self.weeks.len() + 1));
        let id = week.id;
        self.weeks.push(week);
        tracing::debug!(week = %id, count = self.weeks.len(), "added week");
        id
    }

    /// Removing the last remaining week is allowed.
    pub fn remove_week(&mut self, id: WeekId) -> Result<Week> {
        let pos = self
            .weeks
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| AppError::NotFound(format!("week {id}")))?;
        tracing::debug!(week = %id, "removed week");
        Ok(self.weeks.remove(pos))
    }

    /// Appends a default slot and returns its index.
    pub fn add_slot(&mut self, id: WeekId, day: Weekday) -> Result<usize> {
        let slots = &mut self.day_mut(id, day)?.slots;
        slots.push(TimeSlot::default());
        Ok(slots.len() - 1)
    }

    pub fn delete_slot(&mut self, id: WeekId, day: Weekday, index: usize) -> Result<TimeSlot> {
        let slots = &mut self.day_mut(id, day)?.slots;
        if index >= slots.len() {
            return Err(slot_not_found(day, index));
        }
        Ok(slots.remove(index))
    }

    /// Sets one endpoint. Ordering of start/end is checked at save time, not here.
    pub fn update_slot(
        &mut self,
        id: WeekId,
        day: Weekday,
        index: usize,
        field: SlotField,
        value: TimeOfDay,
    ) -> Result<()> {
        let slot = self
            .day_mut(id, day)?
            .slots
            .get_mut(index)
            .ok_or_else(|| slot_not_found(day, index))?;
        match field {
            SlotField::Start => slot.start = value,
            SlotField::End => slot.end = value,
        }
        Ok(())
    }

    pub fn update_slot_str(
        &mut self,
        id: WeekId,
        day: Weekday,
        index: usize,
        field: SlotField,
        raw: &str,
    ) -> Result<()> {
        let value: TimeOfDay = raw.parse()?;
        self.update_slot(id, day, index, field, value)
    }

    /// Day on/off toggle. Off clears the day; on seeds a default slot if it is empty.
    pub fn set_day_enabled(&mut self, id: WeekId, day: Weekday, enabled: bool) -> Result<()> {
        let target = self.day_mut(id, day)?;
        if !enabled {
            target.slots.clear();
        } else if target.slots.is_empty() {
            target.slots.push(TimeSlot::default());
        }
        Ok(())
    }

    pub fn detect_overlaps(&self, id: WeekId) -> Result<WeekConflicts> {
        Ok(detect_week_overlaps(self.week(id)?))
    }

    /// Rejects the first slot whose end is not after its start.
    pub fn validate_slots(&self) -> Result<(), ValidationError> {
        let inverted = self
            .weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .flat_map(|d| d.slots.iter())
            .find(|s| !s.is_ordered());
        match inverted {
            Some(slot) => Err(ValidationError::InvertedSlot {
                start: slot.start,
                end: slot.end,
            }),
            None => Ok(()),
        }
    }

    /// Flattens every week and day into the bulk-update payload.
    ///
    /// The backend has no week dimension, so a slot an earlier week already
    /// sent for the same weekday is skipped. Duplicates inside one week are
    /// kept; they are conflicts the user can see.
    pub fn to_wire(&self) -> Vec<WeeklySlot> {
        let mut sent: HashSet<(Weekday, TimeOfDay, TimeOfDay)> = HashSet::new();
        let mut rows = Vec::new();
        let mut dropped = 0usize;

        for week in &self.weeks {
            let mut this_week = Vec::new();
            for (weekday, day) in week.iter_days() {
                for slot in &day.slots {
                    let key = (weekday, slot.start, slot.end);
                    if sent.contains(&key) {
                        dropped += 1;
                        continue;
                    }
                    this_week.push(key);
                    rows.push(WeeklySlot {
                        weekday,
                        start_time: slot.start,
                        end_time: slot.end,
                        is_available: true,
                    });
                }
            }
            sent.extend(this_week);
        }

        if dropped > 0 {
            tracing::debug!(dropped, "skipped slots repeated from an earlier week");
        }
        rows
    }
}

fn slot_not_found(day: Weekday, index: usize) -> AppError {
    AppError::NotFound(format!("slot {index} on {day}"))
}
