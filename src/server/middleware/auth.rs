use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, SessionIdentity},
};

/// Requirement checked by [`AuthGuard::require`] after the login check.
pub enum Permission {
    /// The user id named by the request path must be the session's user.
    Owner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Verifies the session is logged in and satisfies every permission in order.
    ///
    /// # Returns
    /// - `Ok(SessionIdentity)` - Identity of the logged-in user
    /// - `Err(AuthError::NotLoggedIn)` - No logged-in user in the session
    /// - `Err(AuthError::UserNotInDatabase)` - The session user has been removed
    /// - `Err(AuthError::NotOwner)` - An `Owner` permission names another user
    pub async fn require(&self, permissions: &[Permission]) -> Result<SessionIdentity, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(identity) = auth_session.identity().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_id(identity.user_id).await?.is_none() {
            return Err(AuthError::UserNotInDatabase(identity.user_id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Owner(target_user_id) => {
                    if *target_user_id != identity.user_id {
                        return Err(AuthError::NotOwner {
                            session_user_id: identity.user_id,
                            target_user_id: *target_user_id,
                        }
                        .into());
                    }
                }
            }
        }

        Ok(identity)
    }
}
