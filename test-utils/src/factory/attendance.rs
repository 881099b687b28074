//! Attendance factory for creating check-in and check-out rows.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub const CHECK_IN: &str = "check in";
pub const CHECK_OUT: &str = "check out";

/// Factory for creating attendance rows.
///
/// Defaults to a check-in stamped with the current UTC date and time.
pub struct AttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    user_id: i32,
    label: String,
    date: NaiveDate,
    time: NaiveTime,
}

impl<'a> AttendanceFactory<'a> {
    /// Creates a new AttendanceFactory for the given owner.
    ///
    /// Defaults:
    /// - id: `"ATD-TEST{n}"`
    /// - label: `"check in"`
    /// - date/time: now (UTC)
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            id: format!("ATD-TEST{}", next_id()),
            user_id,
            label: CHECK_IN.to_string(),
            date: now.date_naive(),
            time: now.time(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = time;
        self
    }

    /// Inserts the attendance row.
    pub async fn build(self) -> Result<entity::attendance::Model, DbErr> {
        entity::attendance::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            label: ActiveValue::Set(self.label),
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(self.time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a check-in for today.
pub async fn create_check_in(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::attendance::Model, DbErr> {
    AttendanceFactory::new(db, user_id).build().await
}

/// Creates a check-out for today.
pub async fn create_check_out(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::attendance::Model, DbErr> {
    AttendanceFactory::new(db, user_id)
        .label(CHECK_OUT)
        .build()
        .await
}
