use crate::errors::ValidationError;
use crate::models::buffer_time::MAX_BUFFER_MINUTES;
use crate::models::timezone::is_recognized;
use crate::models::{BufferTimeSettings, CalendarIntegration};

/// Everything the save button checks before anything goes over the wire.
#[derive(Debug, Clone, Copy)]
pub struct SaveForm<'a> {
    pub buffer: &'a BufferTimeSettings,
    pub timezone: &'a str,
    pub integrations: &'a [CalendarIntegration],
}

fn check_buffer_present(form: &SaveForm) -> Result<(), ValidationError> {
    if form.buffer.before_meeting.is_none() || form.buffer.after_meeting.is_none() {
        return Err(ValidationError::MissingBufferTime);
    }
    Ok(())
}

fn check_buffer_range(form: &SaveForm) -> Result<(), ValidationError> {
    let out_of_range = [form.buffer.before_meeting, form.buffer.after_meeting]
        .into_iter()
        .flatten()
        .find(|m| *m > MAX_BUFFER_MINUTES);
    match out_of_range {
        Some(m) => Err(ValidationError::BufferOutOfRange(m.to_string())),
        None => Ok(()),
    }
}

fn check_lunch_window(form: &SaveForm) -> Result<(), ValidationError> {
    match form.buffer.lunch_window() {
        Some((start, end)) if start >= end => Err(ValidationError::InvalidLunchWindow),
        _ => Ok(()),
    }
}

fn check_timezone(form: &SaveForm) -> Result<(), ValidationError> {
    if !is_recognized(form.timezone) {
        return Err(ValidationError::MissingTimezone);
    }
    Ok(())
}

fn check_calendar_connected(form: &SaveForm) -> Result<(), ValidationError> {
    if !form.integrations.iter().any(|i| i.is_connected()) {
        return Err(ValidationError::NoCalendarConnected);
    }
    Ok(())
}

type Rule = fn(&SaveForm) -> Result<(), ValidationError>;

const RULES: [Rule; 5] = [
    check_buffer_present,
    check_buffer_range,
    check_lunch_window,
    check_timezone,
    check_calendar_connected,
];

/// Stops at the first failing rule.
pub fn validate(form: &SaveForm) -> Result<(), ValidationError> {
    RULES.iter().try_for_each(|rule| rule(form))
}

/// Every failing rule, in rule order.
pub fn validate_all(form: &SaveForm) -> Vec<ValidationError> {
    RULES.iter().filter_map(|rule| rule(form).err()).collect()
}
