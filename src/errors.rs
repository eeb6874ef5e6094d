use crate::models::TimeOfDay;

/// Client-side input problems. The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid time \"{0}\": expected HH:MM")]
    MalformedTime(String),

    #[error("invalid weekday {0}: expected 0 (Monday) to 6 (Sunday)")]
    InvalidWeekday(i64),

    #[error("time slot {start}-{end} must end after it starts")]
    InvertedSlot { start: TimeOfDay, end: TimeOfDay },

    #[error("please choose buffer times before and after meetings")]
    MissingBufferTime,

    #[error("buffer time \"{0}\" is not a whole number of minutes")]
    MalformedBufferTime(String),

    #[error("buffer time must be between 0 and 120 minutes, got {0}")]
    BufferOutOfRange(String),

    #[error("lunch break must end after it starts")]
    InvalidLunchWindow,

    #[error("please select a valid time zone")]
    MissingTimezone,

    #[error("connect at least one calendar before saving")]
    NoCalendarConnected,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("a save is already in progress")]
    SaveInProgress,
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
