use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        attendance::{AttendanceDto, AttendanceHistoryDto, EMPTY_ATTENDANCE_HISTORY},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::attendance::AttendanceService,
        state::AppState,
        util::parse::parse_user_id,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

/// Check in for today.
///
/// # Access Control
/// - Logged in, and the path id must be the session user
///
/// # Returns
/// - `200 OK` - Check-in recorded
/// - `400 Bad Request` - Path id is not an integer
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Path id belongs to another user
#[utoipa::path(
    post,
    path = "/api/checkin/{id}",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Check-in recorded", body = ApiResponse<AttendanceDto>),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 401, description = "Please login first!", body = ErrorDto),
        (status = 403, description = "Unauthorized!", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_in(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_user_id(&id)?;
    let identity = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let service = AttendanceService::new(&state.db);
    let attendance = service.check_in(identity.user_id).await?;

    Ok(Json(ApiResponse::success(
        "Successfully Check In!",
        attendance.into_dto(),
    )))
}

/// Check out for today.
///
/// # Access Control
/// - Logged in, and the path id must be the session user
/// - A check-in dated today must exist
///
/// # Returns
/// - `200 OK` - Check-out recorded
/// - `403 Forbidden` - Path id belongs to another user, or no check-in today
#[utoipa::path(
    post,
    path = "/api/checkout/{id}",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Check-out recorded", body = ApiResponse<AttendanceDto>),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 401, description = "Please login first!", body = ErrorDto),
        (status = 403, description = "Unauthorized! or You should check in first!", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_out(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_user_id(&id)?;
    let identity = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let service = AttendanceService::new(&state.db);
    let attendance = service.check_out(identity.user_id).await?;

    Ok(Json(ApiResponse::success(
        "Successfully Check Out!",
        attendance.into_dto(),
    )))
}

/// Get the full attendance history of a user, oldest first.
///
/// A user without attendance gets the placeholder text instead of an empty list.
#[utoipa::path(
    get,
    path = "/api/attendances/{id}",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Attendance history", body = ApiResponse<AttendanceHistoryDto>),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 401, description = "Please login first!", body = ErrorDto),
        (status = 403, description = "Unauthorized!", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance_history(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_user_id(&id)?;
    let identity = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let service = AttendanceService::new(&state.db);
    let history = service.history(identity.user_id).await?;

    let data = if history.is_empty() {
        AttendanceHistoryDto::Empty(EMPTY_ATTENDANCE_HISTORY.to_string())
    } else {
        AttendanceHistoryDto::Entries(history.into_iter().map(|a| a.into_dto()).collect())
    };

    Ok(Json(ApiResponse::success(
        "Successfully get attendance history!",
        data,
    )))
}
