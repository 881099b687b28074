//! Activity domain models and parameters.

use chrono::{NaiveDate, NaiveTime};

use crate::{
    model::activity::{ActivityDto, ActivityInputDto},
    server::{
        error::AppError,
        util::{
            time::{format_date, format_time, parse_date},
            validate::require_non_blank,
        },
    },
};

/// Activity log entry of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: String,
    pub user_id: i32,
    pub description: String,
    pub date_created: NaiveDate,
    pub time_created: NaiveTime,
}

impl Activity {
    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            user_id: self.user_id,
            description: self.description,
            date_created: format_date(self.date_created),
            time_created: format_time(self.time_created),
        }
    }

    pub fn from_entity(entity: entity::activity::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            description: entity.description,
            date_created: entity.date_created,
            time_created: entity.time_created,
        }
    }
}

/// Validates the description of an activity request body.
pub fn description_from_dto(dto: ActivityInputDto) -> Result<String, AppError> {
    require_non_blank("description", &dto.description)?;
    Ok(dto.description)
}

/// Values for a new activity row; the id is assigned by the repository.
#[derive(Debug, Clone)]
pub struct CreateActivityParam {
    pub user_id: i32,
    pub description: String,
    pub date_created: NaiveDate,
    pub time_created: NaiveTime,
}

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range from the `startDate` and `endDate` query parameters.
    ///
    /// # Returns
    /// - `Ok(DateRange)` - Both dates present, well formed, and `start <= end`
    /// - `Err(AppError::BadRequest)` - A date is missing, malformed, or the range is reversed
    pub fn from_query(start: Option<&str>, end: Option<&str>) -> Result<Self, AppError> {
        let start = start.ok_or_else(|| AppError::BadRequest("startDate is required".to_string()))?;
        let end = end.ok_or_else(|| AppError::BadRequest("endDate is required".to_string()))?;

        let start = parse_date("startDate", start)?;
        let end = parse_date("endDate", end)?;

        if start > end {
            return Err(AppError::BadRequest(
                "startDate must not be after endDate".to_string(),
            ));
        }

        Ok(Self { start, end })
    }
}
