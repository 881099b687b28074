use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating or updating an activity.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ActivityInputDto {
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ActivityDto {
    pub id: String,
    pub user_id: i32,
    pub description: String,
    /// Format: `YYYY-MM-DD` (UTC)
    pub date_created: String,
    /// Format: `HH:MM:SS` (UTC)
    pub time_created: String,
}
