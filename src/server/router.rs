use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        activity::{ActivityDto, ActivityInputDto},
        api::{EmptyDto, HealthDto},
        attendance::{AttendanceDto, AttendanceHistoryDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::{
            activity::{
                self, create_activity, delete_activity, get_activities_by_date, update_activity,
            },
            attendance::{self, check_in, check_out, get_attendance_history},
            auth::{self, login, logout, register},
            health::{self, healthcheck, index, openapi},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance API",
        description = "Daily check-in/check-out and activity logging",
    ),
    paths(
        health::index,
        health::healthcheck,
        auth::register,
        auth::login,
        auth::logout,
        attendance::check_in,
        attendance::check_out,
        attendance::get_attendance_history,
        activity::create_activity,
        activity::update_activity,
        activity::delete_activity,
        activity::get_activities_by_date,
    ),
    components(schemas(
        HealthDto,
        EmptyDto,
        RegisterDto,
        LoginDto,
        UserDto,
        AttendanceDto,
        AttendanceHistoryDto,
        ActivityInputDto,
        ActivityDto,
    )),
    tags(
        (name = "health", description = "Service health and documentation"),
        (name = "auth", description = "Registration and session login"),
        (name = "attendance", description = "Check-in, check-out, and history"),
        (name = "activity", description = "Activity log"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/check/health", get(healthcheck))
        .route("/api/openapi.json", get(openapi))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/checkin/{id}", post(check_in))
        .route("/api/checkout/{id}", post(check_out))
        .route("/api/attendances/{id}", get(get_attendance_history))
        .route(
            "/api/activity/{id}",
            post(create_activity).get(get_activities_by_date),
        )
        .route(
            "/api/activity/{id}/{id_activity}",
            put(update_activity).delete(delete_activity),
        )
}
