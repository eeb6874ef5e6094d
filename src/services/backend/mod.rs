pub mod http;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{AvailabilityOverview, BufferTimeSettings, TimezoneSetting, WeeklySlot};

/// The persistence API the editor reads from and saves to.
#[async_trait]
pub trait AvailabilityBackend: Send + Sync {
    async fn fetch_overview(&self) -> Result<AvailabilityOverview>;

    /// Replaces the whole weekly schedule with `slots`.
    async fn save_weekly_availability(&self, slots: &[WeeklySlot]) -> Result<()>;

    async fn save_buffer_time(&self, buffer: &BufferTimeSettings) -> Result<()>;

    async fn save_timezone(&self, timezone: &TimezoneSetting) -> Result<()>;
}
