use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message carried by every error envelope.
pub const FAILED_REQUEST_MESSAGE: &str = "Failed to process request";

/// Uniform response envelope returned by every endpoint.
///
/// Successful responses carry `status: true`, `errors: null` and the payload in
/// `data`. Error responses carry `status: false`, the reason in `errors` and an
/// empty object in `data`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    pub errors: Option<String>,
    pub data: T,
}

/// Empty JSON object used as `data` of error envelopes.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct EmptyDto {}

/// Envelope returned for every failed request.
pub type ErrorDto = ApiResponse<EmptyDto>;

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            errors: None,
            data,
        }
    }
}

impl ApiResponse<EmptyDto> {
    pub fn error(errors: impl Into<String>) -> Self {
        Self {
            status: false,
            message: FAILED_REQUEST_MESSAGE.to_string(),
            errors: Some(errors.into()),
            data: EmptyDto {},
        }
    }
}

/// Payload of the health check endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct HealthDto {
    pub service: String,
    pub version: String,
}
