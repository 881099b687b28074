use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        activity::{ActivityDto, ActivityInputDto},
        api::{ApiResponse, EmptyDto, ErrorDto},
    },
    server::{
        controller::json_body,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::activity::{description_from_dto, DateRange},
        service::{activity::ActivityService, attendance::AttendanceService},
        state::AppState,
        util::parse::parse_user_id,
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// Query parameters of the date-range lookup.
#[derive(Deserialize)]
pub struct DateRangeParams {
    /// Format: `YYYY-MM-DD`, inclusive
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    /// Format: `YYYY-MM-DD`, inclusive
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

/// Create an activity for today.
///
/// # Access Control
/// - Logged in, and the path id must be the session user
/// - A check-in dated today must exist, checked before the body
///
/// # Returns
/// - `201 Created` - Activity created
/// - `400 Bad Request` - Invalid user id, malformed body, or blank description
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Path id belongs to another user, or no check-in today
#[utoipa::path(
    post,
    path = "/api/activity/{id}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body = ActivityInputDto,
    responses(
        (status = 201, description = "Activity created", body = ApiResponse<ActivityDto>),
        (status = 400, description = "Invalid activity data", body = ErrorDto),
        (status = 401, description = "Please login first!", body = ErrorDto),
        (status = 403, description = "Unauthorized! or You should check in first!", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_activity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    payload: Result<Json<ActivityInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_user_id(&id)?;
    let identity = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let checked_in = AttendanceService::new(&state.db)
        .require_checked_in_today(identity.user_id)
        .await?;

    let description = description_from_dto(json_body(payload)?)?;

    let service = ActivityService::new(&state.db);
    let activity = service.create(checked_in, description).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Successfully Created Activity!",
            activity.into_dto(),
        )),
    ))
}

/// Replace the description of an activity.
///
/// Id, owner, and creation date/time are preserved. The activity must exist
/// before the body is validated.
///
/// # Returns
/// - `200 OK` - Activity updated
/// - `404 Not Found` - No such activity for this user
#[utoipa::path(
    put,
    path = "/api/activity/{id}/{id_activity}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("id_activity" = String, Path, description = "Activity id")
    ),
    request_body = ActivityInputDto,
    responses(
        (status = 200, description = "Activity updated", body = ApiResponse<ActivityDto>),
        (status = 400, description = "Invalid activity data", body = ErrorDto),
        (status = 401, description = "Please login first!", body = ErrorDto),
        (status = 403, description = "Unauthorized! or You should check in first!", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_activity(
    State(state): State<AppState>,
    session: Session,
    Path((id, id_activity)): Path<(String, String)>,
    payload: Result<Json<ActivityInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_user_id(&id)?;
    let identity = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let checked_in = AttendanceService::new(&state.db)
        .require_checked_in_today(identity.user_id)
        .await?;

    let service = ActivityService::new(&state.db);
    let existing = service.get_by_id(checked_in, &id_activity).await?;

    let description = description_from_dto(json_body(payload)?)?;

    let activity = service.update(existing, description).await?;

    Ok(Json(ApiResponse::success(
        "Successfully Update Activity!",
        activity.into_dto(),
    )))
}

/// Delete an activity.
#[utoipa::path(
    delete,
    path = "/api/activity/{id}/{id_activity}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("id_activity" = String, Path, description = "Activity id")
    ),
    responses(
        (status = 200, description = "Activity deleted", body = ApiResponse<EmptyDto>),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 401, description = "Please login first!", body = ErrorDto),
        (status = 403, description = "Unauthorized! or You should check in first!", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    session: Session,
    Path((id, id_activity)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_user_id(&id)?;
    let identity = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let checked_in = AttendanceService::new(&state.db)
        .require_checked_in_today(identity.user_id)
        .await?;

    let service = ActivityService::new(&state.db);
    service.delete(checked_in, &id_activity).await?;

    Ok(Json(ApiResponse::success("Activity deleted!", EmptyDto {})))
}

/// Get the activities created within an inclusive date range.
///
/// # Returns
/// - `200 OK` - Activities ordered by creation date then time
/// - `204 No Content` - No activity in the range
/// - `400 Bad Request` - Missing, malformed, or reversed dates
#[utoipa::path(
    get,
    path = "/api/activity/{id}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("startDate" = String, Query, description = "First day, YYYY-MM-DD"),
        ("endDate" = String, Query, description = "Last day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Activities in range", body = ApiResponse<Vec<ActivityDto>>),
        (status = 204, description = "No activity in range"),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Please login first!", body = ErrorDto),
        (status = 403, description = "Unauthorized!", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities_by_date(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    params: Result<Query<DateRangeParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let user_id = parse_user_id(&id)?;
    let identity = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let range = DateRange::from_query(params.start_date.as_deref(), params.end_date.as_deref())?;

    let service = ActivityService::new(&state.db);
    let activities = service.get_by_date_range(identity.user_id, range).await?;

    if activities.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let data: Vec<ActivityDto> = activities.into_iter().map(|a| a.into_dto()).collect();

    Ok(Json(ApiResponse::success("Successfully get activity history!", data)).into_response())
}
