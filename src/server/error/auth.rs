use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message shared by every failed login so callers cannot tell whether the email exists.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No logged-in user in the session.
    #[error("Session is not logged in")]
    NotLoggedIn,

    /// The session names a user that no longer exists.
    #[error("Session user {0} not found in database")]
    UserNotInDatabase(i32),

    /// The session user attempted to access another user's resources.
    #[error("User {session_user_id} attempted to access resources of user {target_user_id}")]
    NotOwner {
        /// User id stored in the session
        session_user_id: i32,
        /// User id named by the request path
        target_user_id: i32,
    },

    /// Unknown email or wrong password during login.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotLoggedIn`, `UserNotInDatabase` → 401 Unauthorized with "Please login first!"
/// - `NotOwner` → 403 Forbidden with "Unauthorized!"
/// - `InvalidCredentials` → 401 Unauthorized with the generic credential message
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::NotLoggedIn | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Please login first!")
            }
            Self::NotOwner { .. } => (StatusCode::FORBIDDEN, "Unauthorized!"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS_MESSAGE),
        };

        (status, Json(ErrorDto::error(message))).into_response()
    }
}
