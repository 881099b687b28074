//! Activity data repository.
//!
//! Every lookup and mutation is scoped to the owning user, so an activity of
//! another user behaves as if it did not exist.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{is_unique_violation, MAX_ID_ATTEMPTS},
    model::activity::{Activity, CreateActivityParam, DateRange},
    util::id::{generate_id, ACTIVITY_ID_PREFIX},
};

pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an activity under a freshly generated id, retrying on id collision.
    ///
    /// # Returns
    /// - `Ok(Activity)` - The stored activity
    /// - `Err(DbErr)` - Database error, or a collision on every attempt
    pub async fn create(&self, param: CreateActivityParam) -> Result<Activity, DbErr> {
        let mut attempt = 1;

        loop {
            let result = entity::activity::ActiveModel {
                id: ActiveValue::Set(generate_id(ACTIVITY_ID_PREFIX)),
                user_id: ActiveValue::Set(param.user_id),
                description: ActiveValue::Set(param.description.clone()),
                date_created: ActiveValue::Set(param.date_created),
                time_created: ActiveValue::Set(param.time_created),
            }
            .insert(self.db)
            .await;

            match result {
                Ok(entity) => return Ok(Activity::from_entity(entity)),
                Err(err) if attempt < MAX_ID_ATTEMPTS && is_unique_violation(&err) => {
                    tracing::warn!(attempt, "Activity id collision, retrying with a new id");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Finds an activity by id if it belongs to the user.
    ///
    /// # Returns
    /// - `Ok(Some(Activity))` - Activity exists and is owned by `user_id`
    /// - `Ok(None)` - No such activity, or it belongs to another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id_for_user(
        &self,
        id: &str,
        user_id: i32,
    ) -> Result<Option<Activity>, DbErr> {
        let entity = entity::prelude::Activity::find_by_id(id.to_string())
            .filter(entity::activity::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Activity::from_entity))
    }

    /// Replaces the description of an activity loaded by `find_by_id_for_user`,
    /// leaving id, owner and creation timestamps untouched.
    ///
    /// # Returns
    /// - `Ok(Activity)` - The updated activity
    /// - `Err(DbErr::RecordNotUpdated)` - The row was removed after it was loaded
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_description(
        &self,
        existing: Activity,
        description: String,
    ) -> Result<Activity, DbErr> {
        let updated = entity::activity::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            user_id: ActiveValue::Unchanged(existing.user_id),
            description: ActiveValue::Set(description),
            date_created: ActiveValue::Unchanged(existing.date_created),
            time_created: ActiveValue::Unchanged(existing.time_created),
        }
        .update(self.db)
        .await?;

        Ok(Activity::from_entity(updated))
    }

    /// Deletes an owned activity.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was removed
    /// - `Ok(false)` - No such activity owned by the user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Activity::delete_many()
            .filter(entity::activity::Column::Id.eq(id))
            .filter(entity::activity::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a user's activities created within the inclusive date range, ordered by
    /// creation date then time.
    pub async fn get_by_user_in_range(
        &self,
        user_id: i32,
        range: DateRange,
    ) -> Result<Vec<Activity>, DbErr> {
        let entities = entity::prelude::Activity::find()
            .filter(entity::activity::Column::UserId.eq(user_id))
            .filter(entity::activity::Column::DateCreated.between(range.start, range.end))
            .order_by_asc(entity::activity::Column::DateCreated)
            .order_by_asc(entity::activity::Column::TimeCreated)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Activity::from_entity).collect())
    }
}
