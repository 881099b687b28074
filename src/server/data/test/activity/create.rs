use super::*;
use crate::server::util::id::ACTIVITY_ID_PREFIX;

/// Tests creating an activity.
///
/// Expected: Ok with a prefixed id and the given fields stored
#[tokio::test]
async fn creates_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let today = Utc::now().date_naive();
    let time = NaiveTime::from_hms_opt(10, 15, 0).unwrap();

    let repo = ActivityRepository::new(db);
    let activity = repo
        .create(CreateActivityParam {
            user_id: user.id,
            description: "Wrote report".to_string(),
            date_created: today,
            time_created: time,
        })
        .await?;

    assert!(activity.id.starts_with(ACTIVITY_ID_PREFIX));
    assert_eq!(activity.user_id, user.id);
    assert_eq!(activity.description, "Wrote report");
    assert_eq!(activity.date_created, today);
    assert_eq!(activity.time_created, time);

    let stored = repo.find_by_id_for_user(&activity.id, user.id).await?;
    assert_eq!(stored, Some(activity));

    Ok(())
}
