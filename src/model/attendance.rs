use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AttendanceDto {
    pub id: String,
    pub user_id: i32,
    /// `"check in"` or `"check out"`
    pub label: String,
    /// Format: `YYYY-MM-DD` (UTC)
    pub date: String,
    /// Format: `HH:MM:SS` (UTC)
    pub time: String,
}

/// Placeholder returned instead of an empty attendance list.
pub const EMPTY_ATTENDANCE_HISTORY: &str = "attendances history is empty";

/// Attendance history payload: the entries, or the placeholder text when there are none.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum AttendanceHistoryDto {
    Entries(Vec<AttendanceDto>),
    Empty(String),
}
