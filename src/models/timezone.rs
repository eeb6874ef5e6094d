use std::env;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Choices offered in the time zone dropdown.
pub const COMMON_TIMEZONES: [&str; 12] = [
    "UTC",
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "Europe/London",
    "Europe/Paris",
    "Europe/Berlin",
    "Asia/Tokyo",
    "Asia/Shanghai",
    "Asia/Kolkata",
    "Australia/Sydney",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneSetting {
    pub timezone: String,
    #[serde(default = "default_auto_detect")]
    pub auto_detect: bool,
}

fn default_auto_detect() -> bool {
    true
}

impl TimezoneSetting {
    /// Uses `TZ` from the environment when it names a known zone, else UTC.
    pub fn detect() -> Self {
        let timezone = env::var("TZ")
            .ok()
            .filter(|tz| is_recognized(tz))
            .unwrap_or_else(|| "UTC".to_string());
        Self {
            timezone,
            auto_detect: true,
        }
    }

    pub fn override_with(&mut self, timezone: impl Into<String>) {
        self.timezone = timezone.into();
        self.auto_detect = false;
    }

    pub fn parse(&self) -> Option<Tz> {
        self.timezone.trim().parse().ok()
    }
}

impl Default for TimezoneSetting {
    fn default() -> Self {
        Self::detect()
    }
}

pub fn is_recognized(timezone: &str) -> bool {
    let timezone = timezone.trim();
    !timezone.is_empty() && timezone.parse::<Tz>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_timezones_are_recognized() {
        for tz in COMMON_TIMEZONES {
            assert!(is_recognized(tz), "{tz}");
        }
    }

    #[test]
    fn test_unrecognized_timezones() {
        assert!(!is_recognized(""));
        assert!(!is_recognized("   "));
        assert!(!is_recognized("Mars/Olympus_Mons"));
    }

    #[test]
    fn test_override_disables_auto_detect() {
        let mut setting = TimezoneSetting {
            timezone: "UTC".to_string(),
            auto_detect: true,
        };
        setting.override_with("Europe/Berlin");
        assert_eq!(setting.timezone, "Europe/Berlin");
        assert!(!setting.auto_detect);
        assert_eq!(setting.parse(), Some(chrono_tz::Europe::Berlin));
    }

    #[test]
    fn test_detect_always_recognized() {
        assert!(is_recognized(&TimezoneSetting::detect().timezone));
    }
}
