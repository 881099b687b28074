use super::*;

/// Tests deleting an owned activity.
///
/// Expected: true, and the activity is gone afterwards
#[tokio::test]
async fn deletes_owned_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let activity = factory::create_activity(db, user.id).await?;

    let repo = ActivityRepository::new(db);

    assert!(repo.delete(&activity.id, user.id).await?);
    assert!(repo
        .find_by_id_for_user(&activity.id, user.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that deleting twice, or deleting another user's activity, affects no rows.
///
/// Expected: false in both cases
#[tokio::test]
async fn reports_zero_rows_affected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let activity = factory::create_activity(db, owner.id).await?;

    let repo = ActivityRepository::new(db);

    assert!(!repo.delete(&activity.id, other.id).await?);
    assert!(repo.delete(&activity.id, owner.id).await?);
    assert!(!repo.delete(&activity.id, owner.id).await?);

    Ok(())
}
