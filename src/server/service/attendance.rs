//! Check-in, check-out, and attendance history.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::attendance::AttendanceRepository,
    error::{attendance::AttendanceError, AppError},
    model::attendance::{Attendance, AttendanceLabel, CheckedInToday, CreateAttendanceParam},
    util::time,
};

pub struct AttendanceService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a check-in stamped with the current UTC date and time.
    pub async fn check_in(&self, user_id: i32) -> Result<Attendance, AppError> {
        self.record(user_id, AttendanceLabel::CheckIn).await
    }

    /// Records a check-out.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The stored check-out
    /// - `Err(AttendanceError::NotCheckedIn)` - No check-in dated today
    pub async fn check_out(&self, user_id: i32) -> Result<Attendance, AppError> {
        self.require_checked_in_today(user_id).await?;

        self.record(user_id, AttendanceLabel::CheckOut).await
    }

    /// Gets every attendance of the user, oldest first.
    pub async fn history(&self, user_id: i32) -> Result<Vec<Attendance>, AppError> {
        let attendance_repo = AttendanceRepository::new(self.db);

        Ok(attendance_repo.get_by_user(user_id).await?)
    }

    /// Fails unless the user has a check-in dated today (UTC).
    ///
    /// Guards check-out and every activity mutation.
    ///
    /// # Returns
    /// - `Ok(CheckedInToday)` - Proof of today's check-in for `user_id`
    /// - `Err(AttendanceError::NotCheckedIn)` - No check-in dated today
    pub async fn require_checked_in_today(&self, user_id: i32) -> Result<CheckedInToday, AppError> {
        let attendance_repo = AttendanceRepository::new(self.db);

        if !attendance_repo
            .has_check_in_on(user_id, time::today())
            .await?
        {
            return Err(AttendanceError::NotCheckedIn(user_id).into());
        }

        Ok(CheckedInToday::new(user_id))
    }

    async fn record(&self, user_id: i32, label: AttendanceLabel) -> Result<Attendance, AppError> {
        let attendance_repo = AttendanceRepository::new(self.db);
        let now = time::now();

        let attendance = attendance_repo
            .create(CreateAttendanceParam {
                user_id,
                label,
                date: now.date_naive(),
                time: now.time(),
            })
            .await?;

        tracing::info!(user_id, label = %label, attendance_id = %attendance.id, "Recorded attendance");

        Ok(attendance)
    }
}
