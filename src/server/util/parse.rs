use crate::server::error::AppError;

/// Parses a user id taken from a request path.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(i32)` - Parsed user id
/// - `Err(AppError::BadRequest)` - The segment is not an integer
pub fn parse_user_id(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|e| AppError::BadRequest(format!("Invalid user id '{}': {}", value, e)))
}
