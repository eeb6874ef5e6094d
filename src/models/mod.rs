pub mod availability;
pub mod buffer_time;
pub mod integration;
pub mod overview;
pub mod time;
pub mod timezone;

pub use availability::{DayAvailability, SlotField, TimeSlot, Week, WeekId, WeeklySlot};
pub use buffer_time::BufferTimeSettings;
pub use integration::{CalendarIntegration, SyncStatus};
pub use overview::{AvailabilityOverview, DateOverride};
pub use time::{TimeOfDay, WEEKDAYS};
pub use timezone::TimezoneSetting;
