use serde::{Deserialize, Serialize};

use super::TimeOfDay;
use crate::errors::ValidationError;

pub const MAX_BUFFER_MINUTES: u32 = 120;

/// Padding around meetings plus an optional lunch break.
///
/// Serialises to the body of `PUT /availability/buffer-time/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferTimeSettings {
    pub before_meeting: Option<u32>,
    pub after_meeting: Option<u32>,
    #[serde(rename = "lunch_start_time")]
    pub lunch_start: Option<TimeOfDay>,
    #[serde(rename = "lunch_end_time")]
    pub lunch_end: Option<TimeOfDay>,
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

impl BufferTimeSettings {
    /// Builds settings from raw form values. Empty strings mean "not set";
    /// range checks are left to the save-time validator.
    pub fn from_form(
        before_meeting: &str,
        after_meeting: &str,
        lunch_start: &str,
        lunch_end: &str,
    ) -> Result<Self, ValidationError> {
        let minutes = |raw: &str| -> Result<Option<u32>, ValidationError> {
            non_empty(raw)
                .map(|v| {
                    v.parse::<u32>()
                        .map_err(|_| ValidationError::MalformedBufferTime(v.to_string()))
                })
                .transpose()
        };
        let time = |raw: &str| -> Result<Option<TimeOfDay>, ValidationError> {
            non_empty(raw).map(str::parse::<TimeOfDay>).transpose()
        };

        Ok(Self {
            before_meeting: minutes(before_meeting)?,
            after_meeting: minutes(after_meeting)?,
            lunch_start: time(lunch_start)?,
            lunch_end: time(lunch_end)?,
        })
    }

    pub fn lunch_window(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        self.lunch_start.zip(self.lunch_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_full() {
        let settings = BufferTimeSettings::from_form("15", "10", "12:00", "13:00").unwrap();
        assert_eq!(settings.before_meeting, Some(15));
        assert_eq!(settings.after_meeting, Some(10));
        assert_eq!(settings.lunch_start, Some("12:00".parse().unwrap()));
        assert_eq!(settings.lunch_end, Some("13:00".parse().unwrap()));
    }

    #[test]
    fn test_from_form_empty_fields() {
        let settings = BufferTimeSettings::from_form("", " ", "", "").unwrap();
        assert_eq!(settings, BufferTimeSettings::default());
        assert!(settings.lunch_window().is_none());
    }

    #[test]
    fn test_from_form_rejects_bad_values() {
        assert_eq!(
            BufferTimeSettings::from_form("ten", "5", "", "").unwrap_err(),
            ValidationError::MalformedBufferTime("ten".to_string())
        );
        assert!(matches!(
            BufferTimeSettings::from_form("5", "-5", "", "").unwrap_err(),
            ValidationError::MalformedBufferTime(_)
        ));
        assert!(matches!(
            BufferTimeSettings::from_form("5", "5", "12:75", "").unwrap_err(),
            ValidationError::MalformedTime(_)
        ));
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"id":3,"user":1,"before_meeting":10,"after_meeting":5,
            "lunch_break_enabled":true,"lunch_start_time":"12:00:00","lunch_end_time":"13:00:00"}"#;
        let settings: BufferTimeSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.before_meeting, Some(10));

        let body = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "before_meeting": 10,
                "after_meeting": 5,
                "lunch_start_time": "12:00",
                "lunch_end_time": "13:00",
            })
        );
    }
}
