use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    #[default]
    Active,
    Error,
    Disabled,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Active => "active",
            SyncStatus::Error => "error",
            SyncStatus::Disabled => "disabled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarIntegration {
    pub id: i64,
    /// `google`, `outlook`, `apple` or `other`.
    pub provider: String,
    #[serde(default)]
    pub provider_display: String,
    #[serde(default)]
    pub calendar_name: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default = "default_sync_enabled")]
    pub sync_enabled: bool,
    #[serde(default)]
    pub sync_status: SyncStatus,
}

fn default_sync_enabled() -> bool {
    true
}

impl CalendarIntegration {
    pub fn is_connected(&self) -> bool {
        self.sync_status != SyncStatus::Disabled
    }

    pub fn display_name(&self) -> &str {
        if !self.provider_display.is_empty() {
            return &self.provider_display;
        }
        match self.provider.as_str() {
            "google" => "Google Calendar",
            "outlook" => "Outlook Calendar",
            "apple" => "Apple Calendar",
            _ => "Other",
        }
    }
}
