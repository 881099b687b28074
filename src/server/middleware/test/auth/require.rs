use super::*;

/// Tests the owner of the path id passes the check.
///
/// Expected: Ok(SessionIdentity) matching the logged-in user
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    AuthSession::new(session).login(&user).await?;

    let guard = AuthGuard::new(db, session);
    let identity = guard.require(&[Permission::Owner(user.id)]).await?;

    assert_eq!(identity.user_id, user.id);
    assert_eq!(identity.name, user.name);
    assert_eq!(identity.email, user.email);

    Ok(())
}

/// Tests a session without login is rejected before ownership is checked.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[Permission::Owner(1)]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests a user id in the path that differs from the session user.
///
/// Expected: Err(AuthError::NotOwner) naming both ids
#[tokio::test]
async fn rejects_other_users_path_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    AuthSession::new(session).login(&user).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[Permission::Owner(user.id + 1)]).await;

    match result {
        Err(AppError::AuthErr(AuthError::NotOwner {
            session_user_id,
            target_user_id,
        })) => {
            assert_eq!(session_user_id, user.id);
            assert_eq!(target_user_id, user.id + 1);
        }
        other => panic!("Expected NotOwner error, got: {:?}", other),
    }

    Ok(())
}

/// Tests that a stored user id without the login flag is not enough.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn requires_login_flag() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    session.insert("user_id", 7).await?;
    session.insert("loggedIn", "true").await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests that an empty permission list only requires login.
///
/// Expected: Ok(SessionIdentity)
#[tokio::test]
async fn empty_permission_list_requires_only_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    AuthSession::new(session).login(&user).await?;

    let identity = AuthGuard::new(db, session).require(&[]).await?;
    assert_eq!(identity.user_id, user.id);

    Ok(())
}

/// Tests a logged-in session whose user row has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_session_of_removed_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    AuthSession::new(session).login(&user).await?;

    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Owner(user.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
            assert_eq!(user_id, user.id)
        }
        other => panic!("Expected UserNotInDatabase error, got: {:?}", other),
    }

    Ok(())
}
