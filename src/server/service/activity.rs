//! Activity log management.
//!
//! Creating, updating, and deleting an activity all require the owner to have
//! checked in today, proven by a [`CheckedInToday`]. Reads do not.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::activity::ActivityRepository,
    error::AppError,
    model::{
        activity::{Activity, CreateActivityParam, DateRange},
        attendance::CheckedInToday,
    },
    util::time,
};

pub const ACTIVITY_NOT_FOUND_MESSAGE: &str = "Activity not found";

pub struct ActivityService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an activity dated now for the checked-in user.
    pub async fn create(
        &self,
        checked_in: CheckedInToday,
        description: String,
    ) -> Result<Activity, AppError> {
        let activity_repo = ActivityRepository::new(self.db);
        let now = time::now();
        let user_id = checked_in.user_id();

        let activity = activity_repo
            .create(CreateActivityParam {
                user_id,
                description,
                date_created: now.date_naive(),
                time_created: now.time(),
            })
            .await?;

        tracing::info!(user_id, activity_id = %activity.id, "Created activity");

        Ok(activity)
    }

    /// Gets an activity of the checked-in user, ahead of updating it.
    ///
    /// # Returns
    /// - `Ok(Activity)` - Activity found
    /// - `Err(AppError::NotFound)` - No such activity, or owned by another user
    pub async fn get_by_id(
        &self,
        checked_in: CheckedInToday,
        id: &str,
    ) -> Result<Activity, AppError> {
        let activity_repo = ActivityRepository::new(self.db);

        activity_repo
            .find_by_id_for_user(id, checked_in.user_id())
            .await?
            .ok_or_else(|| AppError::NotFound(ACTIVITY_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Replaces the description of an activity returned by [`Self::get_by_id`].
    ///
    /// # Returns
    /// - `Ok(Activity)` - The updated activity with original id, owner, and timestamps
    /// - `Err(AppError::NotFound)` - The activity was deleted in the meantime
    pub async fn update(&self, existing: Activity, description: String) -> Result<Activity, AppError> {
        let activity_repo = ActivityRepository::new(self.db);

        let activity = match activity_repo.update_description(existing, description).await {
            Ok(activity) => activity,
            Err(DbErr::RecordNotUpdated) => {
                return Err(AppError::NotFound(ACTIVITY_NOT_FOUND_MESSAGE.to_string()))
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(user_id = activity.user_id, activity_id = %activity.id, "Updated activity");

        Ok(activity)
    }

    /// Deletes an activity of the checked-in user.
    ///
    /// # Returns
    /// - `Ok(())` - Activity removed
    /// - `Err(AppError::NotFound)` - Nothing was deleted
    pub async fn delete(&self, checked_in: CheckedInToday, id: &str) -> Result<(), AppError> {
        let activity_repo = ActivityRepository::new(self.db);
        let user_id = checked_in.user_id();

        if !activity_repo.delete(id, user_id).await? {
            return Err(AppError::NotFound(ACTIVITY_NOT_FOUND_MESSAGE.to_string()));
        }

        tracing::info!(user_id, activity_id = id, "Deleted activity");

        Ok(())
    }

    /// Gets the user's activities created within the inclusive date range.
    pub async fn get_by_date_range(
        &self,
        user_id: i32,
        range: DateRange,
    ) -> Result<Vec<Activity>, AppError> {
        let activity_repo = ActivityRepository::new(self.db);

        Ok(activity_repo.get_by_user_in_range(user_id, range).await?)
    }
}
