//! Date and time helpers.
//!
//! Every stored date and time is UTC. Attendance and activity rows keep the
//! calendar date and the time of day in separate columns, truncated to seconds.

use chrono::{DateTime, NaiveDate, NaiveTime, SubsecRound, Utc};

use crate::server::error::AppError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Current UTC instant truncated to whole seconds.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Current UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` date supplied by a client.
///
/// # Arguments
/// - `field` - Name of the parameter, used in the error message
/// - `value` - Raw parameter value
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date
/// - `Err(AppError::BadRequest)` - Value is not a valid `YYYY-MM-DD` date
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        AppError::BadRequest(format!(
            "{} must be a date formatted as YYYY-MM-DD, got '{}': {}",
            field, value, e
        ))
    })
}
