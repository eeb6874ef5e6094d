use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDate;

use crate::errors::{AppError, Result, ValidationError};
use crate::models::{
    AvailabilityOverview, BufferTimeSettings, CalendarIntegration, DateOverride, TimezoneSetting,
};
use crate::services::backend::AvailabilityBackend;
use crate::services::editor::AvailabilityEditor;
use crate::services::validation::{self, SaveForm};

/// Everything the availability page edits, owned by the page for one session.
///
/// `overrides` are local only: [`EditorSession::save`] does not send them.
#[derive(Debug)]
pub struct EditorSession {
    pub editor: AvailabilityEditor,
    pub buffer: BufferTimeSettings,
    pub timezone: TimezoneSetting,
    pub integrations: Vec<CalendarIntegration>,
    pub overrides: Vec<DateOverride>,
    saving: AtomicBool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the in-flight flag on every exit path of a save.
struct SavingGuard<'a>(&'a AtomicBool);

impl<'a> SavingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            editor: AvailabilityEditor::new(),
            buffer: BufferTimeSettings::default(),
            timezone: TimezoneSetting::detect(),
            integrations: Vec::new(),
            overrides: Vec::new(),
            saving: AtomicBool::new(false),
        }
    }

    /// A user with no saved slots gets the default week instead of seven empty days.
    pub fn from_overview(overview: AvailabilityOverview) -> Self {
        let editor = if overview.weekly_availability.is_empty() {
            AvailabilityEditor::new()
        } else {
            AvailabilityEditor::from_slots(&overview.weekly_availability)
        };

        Self {
            editor,
            buffer: overview.buffer_time.unwrap_or_default(),
            timezone: overview
                .timezone_settings
                .unwrap_or_else(TimezoneSetting::detect),
            integrations: overview.calendar_integrations,
            overrides: overview.date_overrides,
            saving: AtomicBool::new(false),
        }
    }

    pub async fn load(backend: &dyn AvailabilityBackend) -> Result<Self> {
        let overview = backend.fetch_overview().await?;
        Ok(Self::from_overview(overview))
    }

    pub fn save_form(&self) -> SaveForm<'_> {
        SaveForm {
            buffer: &self.buffer,
            timezone: &self.timezone.timezone,
            integrations: &self.integrations,
        }
    }

    /// Form rules first, then slot ordering. Stops at the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate(&self.save_form())?;
        self.editor.validate_slots()
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::SeqCst)
    }

    /// Validates, then pushes the schedule, buffer time and time zone.
    ///
    /// The three writes are separate requests sent in that order, stopping at
    /// the first error. A save is not atomic on the server: if the buffer or
    /// time zone write fails, the weekly schedule has already been stored.
    /// The session itself is never modified here, so the user's edits stay in
    /// place for a retry.
    pub async fn save(&self, backend: &dyn AvailabilityBackend) -> Result<()> {
        let _guard = SavingGuard::acquire(&self.saving).ok_or(AppError::SaveInProgress)?;

        self.validate()?;

        let slots = self.editor.to_wire();
        backend.save_weekly_availability(&slots).await?;
        backend.save_buffer_time(&self.buffer).await?;
        backend.save_timezone(&self.timezone).await?;

        tracing::info!(
            weeks = self.editor.week_count(),
            slots = slots.len(),
            "availability settings saved"
        );
        Ok(())
    }

    /// Adds an all-day unavailable override. Kept in the session only.
    pub fn add_override(&mut self, date: NaiveDate) -> usize {
        self.overrides.push(DateOverride::unavailable(date));
        self.overrides.len() - 1
    }

    pub fn remove_override(&mut self, index: usize) -> Result<DateOverride> {
        if index >= self.overrides.len() {
            return Err(AppError::NotFound(format!("date override {index}")));
        }
        Ok(self.overrides.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SyncStatus, WeeklySlot};
    use chrono::Weekday;

    fn connected() -> CalendarIntegration {
        CalendarIntegration {
            id: 1,
            provider: "google".to_string(),
            provider_display: String::new(),
            calendar_name: "Work".to_string(),
            is_primary: true,
            sync_enabled: true,
            sync_status: SyncStatus::Active,
        }
    }

    #[test]
    fn test_empty_overview_seeds_default_week() {
        let session = EditorSession::from_overview(AvailabilityOverview::default());
        assert_eq!(session.editor.week_count(), 1);
        assert_eq!(session.editor.weeks()[0].slot_count(), 7);
        assert_eq!(session.buffer, BufferTimeSettings::default());
    }

    #[test]
    fn test_overview_slots_are_loaded() {
        let overview = AvailabilityOverview {
            weekly_availability: vec![WeeklySlot {
                weekday: Weekday::Tue,
                start_time: "10:00".parse().unwrap(),
                end_time: "11:00".parse().unwrap(),
                is_available: true,
            }],
            ..Default::default()
        };
        let session = EditorSession::from_overview(overview);
        let week = &session.editor.weeks()[0];
        assert_eq!(week.slot_count(), 1);
        assert_eq!(week.day(Weekday::Tue).summary(), "10:00 - 11:00");
    }

    #[test]
    fn test_validate_checks_form_before_slots() {
        let mut session = EditorSession::new();
        assert_eq!(session.validate().unwrap_err(), ValidationError::MissingBufferTime);

        session.buffer = BufferTimeSettings::from_form("10", "10", "", "").unwrap();
        session.timezone.override_with("UTC");
        session.integrations.push(connected());
        assert!(session.validate().is_ok());

        let id = session.editor.weeks()[0].id;
        session
            .editor
            .update_slot_str(id, Weekday::Mon, 0, crate::models::SlotField::End, "09:00")
            .unwrap();
        assert!(matches!(
            session.validate().unwrap_err(),
            ValidationError::InvertedSlot { .. }
        ));
    }

    #[test]
    fn test_overrides() {
        let mut session = EditorSession::new();
        let date = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
        assert_eq!(session.add_override(date), 0);
        assert!(!session.overrides[0].is_available);
        assert!(matches!(session.remove_override(3), Err(AppError::NotFound(_))));
        assert_eq!(session.remove_override(0).unwrap().date, date);
        assert!(session.overrides.is_empty());
    }

    #[test]
    fn test_guard_releases_flag() {
        let flag = AtomicBool::new(false);
        {
            let _guard = SavingGuard::acquire(&flag).unwrap();
            assert!(SavingGuard::acquire(&flag).is_none());
        }
        assert!(SavingGuard::acquire(&flag).is_some());
    }
}
