use super::*;
use crate::server::util::id::ATTENDANCE_ID_PREFIX;

/// Tests creating a check-in.
///
/// Verifies that the row receives a generated id with the attendance prefix and
/// keeps the given owner, label, date, and time.
///
/// Expected: Ok with attendance created
#[tokio::test]
async fn creates_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let today = Utc::now().date_naive();
    let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

    let repo = AttendanceRepository::new(db);
    let attendance = repo
        .create(CreateAttendanceParam {
            user_id: user.id,
            label: AttendanceLabel::CheckIn,
            date: today,
            time,
        })
        .await?;

    assert!(attendance.id.starts_with(ATTENDANCE_ID_PREFIX));
    assert_eq!(attendance.user_id, user.id);
    assert_eq!(attendance.label, AttendanceLabel::CheckIn);
    assert_eq!(attendance.date, today);
    assert_eq!(attendance.time, time);

    Ok(())
}

/// Tests that check-in and check-out share the same write path.
///
/// Expected: Ok with two rows of distinct ids and labels
#[tokio::test]
async fn creates_check_out_through_same_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let repo = AttendanceRepository::new(db);
    let mut ids = Vec::new();
    for label in [AttendanceLabel::CheckIn, AttendanceLabel::CheckOut] {
        let attendance = repo
            .create(CreateAttendanceParam {
                user_id: user.id,
                label,
                date: now.date_naive(),
                time: now.time(),
            })
            .await?;
        assert_eq!(attendance.label, label);
        ids.push(attendance.id);
    }

    assert_ne!(ids[0], ids[1]);

    Ok(())
}

/// Tests that an attendance for a non-existent user is rejected.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = AttendanceRepository::new(db);
    let result = repo
        .create(CreateAttendanceParam {
            user_id: 999,
            label: AttendanceLabel::CheckIn,
            date: now.date_naive(),
            time: now.time(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
