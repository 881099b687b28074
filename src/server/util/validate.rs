use crate::server::error::AppError;

/// Longest value a `VARCHAR(255)` user column accepts, in characters.
pub const MAX_FIELD_LEN: usize = 255;

/// Rejects empty or whitespace-only required fields.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(())
}

/// Rejects values longer than `max` characters.
pub fn require_max_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Checks the overall shape `local@domain.tld` of an email address.
///
/// The local part and every domain label must be non-empty, the domain needs at
/// least one dot, and whitespace is not allowed anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
