//! Attendance data repository.
//!
//! Check-ins and check-outs share one table and one write path; the label column
//! distinguishes them.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{is_unique_violation, MAX_ID_ATTEMPTS},
    model::attendance::{Attendance, AttendanceLabel, CreateAttendanceParam},
    util::id::{generate_id, ATTENDANCE_ID_PREFIX},
};

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an attendance row under a freshly generated id.
    ///
    /// An id that collides with an existing row is replaced with a new one, up to
    /// `MAX_ID_ATTEMPTS` inserts.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The stored attendance
    /// - `Err(DbErr)` - Database error, or a collision on every attempt
    pub async fn create(&self, param: CreateAttendanceParam) -> Result<Attendance, DbErr> {
        let mut attempt = 1;

        loop {
            let result = entity::attendance::ActiveModel {
                id: ActiveValue::Set(generate_id(ATTENDANCE_ID_PREFIX)),
                user_id: ActiveValue::Set(param.user_id),
                label: ActiveValue::Set(param.label.as_str().to_string()),
                date: ActiveValue::Set(param.date),
                time: ActiveValue::Set(param.time),
            }
            .insert(self.db)
            .await;

            match result {
                Ok(entity) => return Attendance::from_entity(entity),
                Err(err) if attempt < MAX_ID_ATTEMPTS && is_unique_violation(&err) => {
                    tracing::warn!(attempt, "Attendance id collision, retrying with a new id");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Gets all attendance rows of a user ordered by date then time, oldest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Attendance>, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::UserId.eq(user_id))
            .order_by_asc(entity::attendance::Column::Date)
            .order_by_asc(entity::attendance::Column::Time)
            .all(self.db)
            .await?
            .into_iter()
            .map(Attendance::from_entity)
            .collect()
    }

    /// Checks whether the user has a check-in row dated `date`.
    pub async fn has_check_in_on(&self, user_id: i32, date: NaiveDate) -> Result<bool, DbErr> {
        let count = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::UserId.eq(user_id))
            .filter(entity::attendance::Column::Date.eq(date))
            .filter(entity::attendance::Column::Label.eq(AttendanceLabel::CheckIn.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
