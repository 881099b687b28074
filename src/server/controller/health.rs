use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa::OpenApi;

use crate::{
    model::api::{ApiResponse, HealthDto},
    server::router::ApiDoc,
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

pub const HEALTH_PATH: &str = "/api/check/health";

/// Redirects the site root to the health check.
///
/// # Returns
/// - `302 Found` - `Location: /api/check/health`
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 302, description = "Redirect to the health check")
    ),
)]
pub async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, HEALTH_PATH)])
}

/// Reports that the service is up.
#[utoipa::path(
    get,
    path = "/api/check/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = ApiResponse<HealthDto>)
    ),
)]
pub async fn healthcheck() -> impl IntoResponse {
    Json(ApiResponse::success(
        "Healthcheck successful",
        HealthDto {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    ))
}

/// Serves the OpenAPI document describing every endpoint.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
