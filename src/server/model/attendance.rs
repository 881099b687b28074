//! Attendance domain models and parameters.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::DbErr;
use std::fmt;

use crate::{
    model::attendance::AttendanceDto,
    server::util::time::{format_date, format_time},
};

/// Kind of attendance event, stored as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceLabel {
    CheckIn,
    CheckOut,
}

impl AttendanceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckIn => "check in",
            Self::CheckOut => "check out",
        }
    }

    /// Parses a stored label.
    ///
    /// # Returns
    /// - `Ok(AttendanceLabel)` - Known label
    /// - `Err(DbErr::Type)` - The column holds an unknown label
    pub fn from_stored(value: &str) -> Result<Self, DbErr> {
        match value {
            "check in" => Ok(Self::CheckIn),
            "check out" => Ok(Self::CheckOut),
            other => Err(DbErr::Type(format!("Unknown attendance label '{}'", other))),
        }
    }
}

impl fmt::Display for AttendanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A check-in or check-out event of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub id: String,
    pub user_id: i32,
    pub label: AttendanceLabel,
    /// UTC calendar date of the event.
    pub date: NaiveDate,
    /// UTC time of day of the event.
    pub time: NaiveTime,
}

impl Attendance {
    /// Converts to the display form with `YYYY-MM-DD` date and `HH:MM:SS` time.
    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            user_id: self.user_id,
            label: self.label.as_str().to_string(),
            date: format_date(self.date),
            time: format_time(self.time),
        }
    }

    pub fn from_entity(entity: entity::attendance::Model) -> Result<Self, DbErr> {
        Ok(Self {
            label: AttendanceLabel::from_stored(&entity.label)?,
            id: entity.id,
            user_id: entity.user_id,
            date: entity.date,
            time: entity.time,
        })
    }
}

/// Proof that a user has a check-in dated today.
///
/// Only obtainable from `AttendanceService::require_checked_in_today`; activity
/// mutations take it so the same-day policy cannot be skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckedInToday {
    user_id: i32,
}

impl CheckedInToday {
    pub(crate) fn new(user_id: i32) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }
}

/// Values for a new attendance row; the id is assigned by the repository.
#[derive(Debug, Clone)]
pub struct CreateAttendanceParam {
    pub user_id: i32,
    pub label: AttendanceLabel,
    pub date: NaiveDate,
    pub time: NaiveTime,
}
