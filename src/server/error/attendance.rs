use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AttendanceError {
    /// The user has no check-in dated today.
    ///
    /// Check-out and every activity mutation require one. Results in 403 Forbidden.
    #[error("User {0} has not checked in today")]
    NotCheckedIn(i32),
}

impl IntoResponse for AttendanceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotCheckedIn(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::error("You should check in first!")),
            )
                .into_response(),
        }
    }
}
