use crate::server::{error::AppError, middleware::session::AuthSession, model::user::User};
use test_utils::builder::TestBuilder;

fn user() -> User {
    User {
        id: 42,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
    }
}

/// Tests login stores the identity and the login flag.
///
/// Expected: logged in with user id, name, and email readable
#[tokio::test]
async fn login_stores_identity() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.login(&user()).await?;

    assert!(auth_session.is_logged_in().await?);
    assert_eq!(auth_session.user_id().await?, Some(42));

    let identity = auth_session.identity().await?.unwrap();
    assert_eq!(identity.name, "Alice");
    assert_eq!(identity.email, "alice@example.com");

    Ok(())
}

/// Tests a fresh session is logged out.
///
/// Expected: not logged in and no identity
#[tokio::test]
async fn fresh_session_is_logged_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);

    assert!(!auth_session.is_logged_in().await?);
    assert!(auth_session.user_id().await?.is_none());
    assert!(auth_session.identity().await?.is_none());

    Ok(())
}

/// Tests logout removes every key.
///
/// Expected: not logged in and no user id after logout
#[tokio::test]
async fn logout_clears_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.login(&user()).await?;
    auth_session.logout().await?;

    assert!(!auth_session.is_logged_in().await?);
    assert!(auth_session.user_id().await?.is_none());

    Ok(())
}
