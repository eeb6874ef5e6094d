use std::collections::BTreeSet;

use chrono::Weekday;

use crate::models::{TimeSlot, Week};

/// Indices of conflicting slots, per day of one week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekConflicts {
    days: [BTreeSet<usize>; 7],
}

impl WeekConflicts {
    pub fn for_day(&self, day: Weekday) -> &BTreeSet<usize> {
        &self.days[day.num_days_from_monday() as usize]
    }

    pub fn day_has_conflicts(&self, day: Weekday) -> bool {
        !self.for_day(day).is_empty()
    }

    pub fn has_conflicts(&self) -> bool {
        self.days.iter().any(|d| !d.is_empty())
    }
}

/// Pairwise check over one day's slots. Slots per day stay small, so O(n²) is fine.
pub fn detect_day_overlaps(slots: &[TimeSlot]) -> BTreeSet<usize> {
    let mut flagged = BTreeSet::new();
    for (i, a) in slots.iter().enumerate() {
        for (j, b) in slots.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                flagged.insert(i);
                flagged.insert(j);
            }
        }
    }
    flagged
}

pub fn detect_week_overlaps(week: &Week) -> WeekConflicts {
    let mut conflicts = WeekConflicts::default();
    for (idx, day) in week.days.iter().enumerate() {
        conflicts.days[idx] = detect_day_overlaps(&day.slots);
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(pairs: &[(&str, &str)]) -> Vec<TimeSlot> {
        pairs
            .iter()
            .map(|(s, e)| TimeSlot::new(s.parse().unwrap(), e.parse().unwrap()))
            .collect()
    }

    #[test]
    fn test_partial_overlap_flags_both() {
        let day = slots(&[("09:00", "10:00"), ("09:30", "10:30"), ("11:00", "12:00")]);
        assert_eq!(detect_day_overlaps(&day), BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_abutting_slots_are_free() {
        let day = slots(&[("09:00", "10:00"), ("10:00", "11:00")]);
        assert!(detect_day_overlaps(&day).is_empty());
    }

    #[test]
    fn test_identical_slots_conflict() {
        let day = slots(&[("09:00", "12:00"), ("09:00", "12:00")]);
        assert_eq!(detect_day_overlaps(&day), BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_order_independent() {
        let day = slots(&[("14:00", "15:00"), ("08:00", "09:00"), ("13:30", "14:30")]);
        assert_eq!(detect_day_overlaps(&day), BTreeSet::from([0, 2]));
    }

    #[test]
    fn test_nested_and_chained() {
        let day = slots(&[("08:00", "18:00"), ("09:00", "10:00"), ("12:00", "13:00"), ("18:00", "19:00")]);
        assert_eq!(detect_day_overlaps(&day), BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn test_empty_and_single() {
        assert!(detect_day_overlaps(&[]).is_empty());
        assert!(detect_day_overlaps(&slots(&[("09:00", "10:00")])).is_empty());
    }

    #[test]
    fn test_week_conflicts_per_day() {
        let mut week = Week::empty("Week 1");
        week.day_mut(Weekday::Tue).slots = slots(&[("09:00", "10:00"), ("09:30", "10:30")]);
        week.day_mut(Weekday::Wed).slots = slots(&[("09:00", "10:00"), ("10:00", "11:00")]);

        let conflicts = detect_week_overlaps(&week);
        assert!(conflicts.has_conflicts());
        assert!(conflicts.day_has_conflicts(Weekday::Tue));
        assert!(!conflicts.day_has_conflicts(Weekday::Wed));
        assert!(conflicts.for_day(Weekday::Mon).is_empty());
    }
}
