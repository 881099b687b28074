//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user who has already checked in today.
///
/// # Returns
/// - `Ok((user, check_in))` - The created user and their check-in row
/// - `Err(DbErr)` - Database error during creation
pub async fn create_checked_in_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::attendance::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let check_in = crate::factory::attendance::create_check_in(db, user.id).await?;

    Ok((user, check_in))
}
