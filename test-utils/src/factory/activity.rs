//! Activity factory for creating activity log rows.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating activity rows.
pub struct ActivityFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    user_id: i32,
    description: String,
    date_created: NaiveDate,
    time_created: NaiveTime,
}

impl<'a> ActivityFactory<'a> {
    /// Creates a new ActivityFactory for the given owner.
    ///
    /// Defaults:
    /// - id: `"ACT-TEST{n}"`
    /// - description: `"Activity {n}"`
    /// - date_created/time_created: now (UTC)
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let n = next_id();
        let now = Utc::now();
        Self {
            db,
            id: format!("ACT-TEST{}", n),
            user_id,
            description: format!("Activity {}", n),
            date_created: now.date_naive(),
            time_created: now.time(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn date_created(mut self, date: NaiveDate) -> Self {
        self.date_created = date;
        self
    }

    pub fn time_created(mut self, time: NaiveTime) -> Self {
        self.time_created = time;
        self
    }

    /// Inserts the activity row.
    pub async fn build(self) -> Result<entity::activity::Model, DbErr> {
        entity::activity::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            description: ActiveValue::Set(self.description),
            date_created: ActiveValue::Set(self.date_created),
            time_created: ActiveValue::Set(self.time_created),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an activity dated now.
pub async fn create_activity(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db, user_id).build().await
}
