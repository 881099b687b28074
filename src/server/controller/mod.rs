//! HTTP request handlers.
//!
//! Controllers parse path, query, and body input, run the authorization check,
//! call into the service layer, and wrap the result in the response envelope.

pub mod activity;
pub mod attendance;
pub mod auth;
pub mod health;

#[cfg(test)]
mod test;

use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::AppError;

/// Unwraps a JSON body, reporting a malformed or mistyped body as 400 Bad Request.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}
