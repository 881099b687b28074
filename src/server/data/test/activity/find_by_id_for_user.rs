use super::*;

/// Tests that an activity is only visible to its owner.
///
/// Expected: Some for the owner, None for another user and for an unknown id
#[tokio::test]
async fn scopes_lookup_to_owner() -> Result<(), DbErr> {
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

    let found = repo.find_by_id_for_user(&activity.id, owner.id).await?;
    assert_eq!(found.map(|a| a.description), Some(activity.description.clone()));

    assert!(repo
        .find_by_id_for_user(&activity.id, other.id)
        .await?
        .is_none());
    assert!(repo
        .find_by_id_for_user("ACT-doesnotexist00", owner.id)
        .await?
        .is_none());

    Ok(())
}
