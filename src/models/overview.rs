use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BufferTimeSettings, CalendarIntegration, TimeOfDay, TimezoneSetting, WeeklySlot};

/// A one-off exception for a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOverride {
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<TimeOfDay>,
    #[serde(default)]
    pub end_time: Option<TimeOfDay>,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub reason: String,
}

impl DateOverride {
    pub fn unavailable(date: NaiveDate) -> Self {
        Self {
            date,
            start_time: None,
            end_time: None,
            is_available: false,
            reason: String::new(),
        }
    }
}

/// Response of `GET /availability/overview/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityOverview {
    #[serde(default)]
    pub weekly_availability: Vec<WeeklySlot>,
    #[serde(default)]
    pub buffer_time: Option<BufferTimeSettings>,
    #[serde(default)]
    pub timezone_settings: Option<TimezoneSetting>,
    #[serde(default)]
    pub calendar_integrations: Vec<CalendarIntegration>,
    #[serde(default)]
    pub date_overrides: Vec<DateOverride>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_parse_overview() {
        let json = r#"{
            "weekly_availability": [
                {"id":1,"weekday":0,"weekday_display":"Monday","start_time":"09:00:00","end_time":"12:00:00","is_available":true},
                {"id":2,"weekday":4,"weekday_display":"Friday","start_time":"13:00:00","end_time":"17:00:00","is_available":true}
            ],
            "date_overrides": [
                {"id":9,"date":"2026-12-24","start_time":null,"end_time":null,"is_available":false,"reason":"Holiday"}
            ],
            "buffer_time": null,
            "timezone_settings": {"id":1,"timezone":"Europe/Paris","auto_detect":false},
            "calendar_integrations": [],
            "availability_rules": []
        }"#;

        let overview: AvailabilityOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.weekly_availability.len(), 2);
        assert_eq!(overview.weekly_availability[1].weekday, Weekday::Fri);
        assert!(overview.buffer_time.is_none());
        assert_eq!(overview.timezone_settings.unwrap().timezone, "Europe/Paris");
        assert_eq!(overview.date_overrides[0].reason, "Holiday");
        assert_eq!(
            overview.date_overrides[0].date,
            NaiveDate::from_ymd_opt(2026, 12, 24).unwrap()
        );
    }

    #[test]
    fn test_parse_minimal_overview() {
        let overview: AvailabilityOverview = serde_json::from_str("{}").unwrap();
        assert!(overview.weekly_availability.is_empty());
        assert!(overview.calendar_integrations.is_empty());
    }
}
