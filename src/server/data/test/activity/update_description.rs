use super::*;

/// Tests that an update replaces only the description.
///
/// Expected: Ok with id, owner, and creation timestamps unchanged
#[tokio::test]
async fn replaces_only_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let yesterday = Utc::now().date_naive().pred_opt().unwrap();
    let created = ActivityFactory::new(db, user.id)
        .description("Before")
        .date_created(yesterday)
        .time_created(NaiveTime::from_hms_opt(14, 0, 0).unwrap())
        .build()
        .await?;

    let repo = ActivityRepository::new(db);
    let existing = repo
        .find_by_id_for_user(&created.id, user.id)
        .await?
        .unwrap();
    let updated = repo
        .update_description(existing, "After".to_string())
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.user_id, created.user_id);
    assert_eq!(updated.description, "After");
    assert_eq!(updated.date_created, created.date_created);
    assert_eq!(updated.time_created, created.time_created);

    let stored = repo
        .find_by_id_for_user(&created.id, user.id)
        .await?
        .unwrap();
    assert_eq!(stored.description, "After");

    Ok(())
}

/// Tests updating an activity that was deleted after it was loaded.
///
/// Expected: Err(DbErr::RecordNotUpdated) and nothing is recreated
#[tokio::test]
async fn fails_when_row_was_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_activity(db, user.id).await?;

    let repo = ActivityRepository::new(db);
    let existing = repo
        .find_by_id_for_user(&created.id, user.id)
        .await?
        .unwrap();
    assert!(repo.delete(&created.id, user.id).await?);

    let result = repo.update_description(existing, "After".to_string()).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    assert!(repo
        .find_by_id_for_user(&created.id, user.id)
        .await?
        .is_none());

    Ok(())
}
