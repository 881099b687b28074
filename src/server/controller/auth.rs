use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ErrorDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::json_body,
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{LoginParam, RegisterUserParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// # Arguments
/// - `state` - Application state containing the database connection and bcrypt cost
/// - `payload` - Name, email, and password of the new user
///
/// # Returns
/// - `201 Created` - User registered
/// - `400 Bad Request` - Malformed body, blank field, or invalid email
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email has been used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterUserParam::from_dto(json_body(payload)?)?;

    let service = AuthService::new(&state.db, state.bcrypt_cost);
    let user = service.register(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "User Registered! Please Login",
            user.into_dto(),
        )),
    ))
}

/// Log in with email and password.
///
/// On success the session is marked as logged in and the session cookie is set.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `400 Bad Request` - Malformed body or invalid email
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database, hashing, or session error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = LoginParam::from_dto(json_body(payload)?)?;

    let service = AuthService::new(&state.db, state.bcrypt_cost);
    let user = service.login(param).await?;

    AuthSession::new(&session).login(&user).await?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(ApiResponse::success(
        "Successfully Logged In!",
        user.into_dto(),
    )))
}

/// Log out and destroy the session.
///
/// # Returns
/// - `200 OK` - Logged out
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<Option<EmptyDto>>),
        (status = 401, description = "Please login first!", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AuthSession::new(&session).logout().await?;

    tracing::info!(user_id = identity.user_id, "User logged out");

    Ok(Json(ApiResponse::<Option<EmptyDto>>::success(
        "Successfully Logged Out!",
        None,
    )))
}
