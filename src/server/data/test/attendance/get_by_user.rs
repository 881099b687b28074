use super::*;
use test_utils::factory::attendance::{AttendanceFactory, CHECK_OUT};

/// Tests that history is ordered by date then time.
///
/// Rows are inserted out of order and must come back oldest first.
///
/// Expected: Ok with rows in chronological order
#[tokio::test]
async fn returns_rows_in_chronological_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let today = Utc::now().date_naive();
    let yesterday = today.pred_opt().unwrap();

    AttendanceFactory::new(db, user.id)
        .label(CHECK_OUT)
        .date(today)
        .time(NaiveTime::from_hms_opt(17, 0, 0).unwrap())
        .build()
        .await?;
    AttendanceFactory::new(db, user.id)
        .date(today)
        .time(NaiveTime::from_hms_opt(8, 0, 0).unwrap())
        .build()
        .await?;
    AttendanceFactory::new(db, user.id)
        .date(yesterday)
        .time(NaiveTime::from_hms_opt(23, 0, 0).unwrap())
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);
    let history = repo.get_by_user(user.id).await?;

    let stamps: Vec<_> = history.iter().map(|a| (a.date, a.time)).collect();
    let mut sorted = stamps.clone();
    sorted.sort();
    assert_eq!(stamps, sorted);
    assert_eq!(history.len(), 3);
    assert_eq!(history[2].label, AttendanceLabel::CheckOut);

    Ok(())
}

/// Tests that history only contains the requested user's rows.
///
/// Expected: Ok with only the owner's row, and empty for a user without rows
#[tokio::test]
async fn excludes_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let check_in = factory::create_check_in(db, owner.id).await?;

    let repo = AttendanceRepository::new(db);

    let history = repo.get_by_user(owner.id).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, check_in.id);

    assert!(repo.get_by_user(other.id).await?.is_empty());

    Ok(())
}
