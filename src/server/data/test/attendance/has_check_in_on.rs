use super::*;
use test_utils::factory::attendance::AttendanceFactory;

/// Tests detection of a same-day check-in.
///
/// Expected: true once a check-in dated today exists
#[tokio::test]
async fn detects_check_in_today() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::helpers::create_checked_in_user(db).await?;

    let repo = AttendanceRepository::new(db);
    assert!(repo.has_check_in_on(user.id, Utc::now().date_naive()).await?);

    Ok(())
}

/// Tests that check-outs and check-ins from other days do not count.
///
/// Expected: false for a user with only a check-out today and a check-in yesterday
#[tokio::test]
async fn ignores_check_out_and_other_days() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let today = Utc::now().date_naive();

    factory::create_check_out(db, user.id).await?;
    AttendanceFactory::new(db, user.id)
        .date(today.pred_opt().unwrap())
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);
    assert!(!repo.has_check_in_on(user.id, today).await?);

    Ok(())
}

/// Tests that another user's check-in does not count.
///
/// Expected: false
#[tokio::test]
async fn ignores_other_users_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _) = factory::helpers::create_checked_in_user(db).await?;
    let user = factory::create_user(db).await?;

    let repo = AttendanceRepository::new(db);
    assert!(!repo.has_check_in_on(user.id, Utc::now().date_naive()).await?);

    Ok(())
}
